//! Application context shared by all commands.

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::{Result, TgError};
use crate::registry::SkillRegistry;

pub struct AppContext {
    pub config: Config,
    pub root: PathBuf,
    pub output: OutputFormat,
}

impl AppContext {
    /// Build the context from parsed CLI arguments.
    ///
    /// The tg root is `TG_ROOT` when set, otherwise the platform data
    /// directory. Config layering happens relative to that root.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let root = match std::env::var("TG_ROOT") {
            Ok(root) => PathBuf::from(root),
            Err(_) => dirs::data_dir()
                .ok_or_else(|| TgError::Config("data directory not found".to_string()))?
                .join("tg"),
        };

        let config = Config::load(cli.config.as_deref(), &root)?;

        Ok(Self {
            config,
            root,
            output: cli.output_format(),
        })
    }

    /// Whether output should be machine-readable JSON.
    #[must_use]
    pub fn machine_mode(&self) -> bool {
        self.output.is_machine_readable()
    }

    /// Effective path of the local skill registry file.
    #[must_use]
    pub fn skills_path(&self) -> PathBuf {
        self.config
            .skills
            .path
            .clone()
            .unwrap_or_else(|| self.root.join("skills.json"))
    }

    /// Load the local skill registry.
    pub fn load_registry(&self) -> Result<SkillRegistry> {
        SkillRegistry::load(self.skills_path())
    }

    /// Persist the local skill registry.
    pub fn save_registry(&self, registry: &SkillRegistry) -> Result<()> {
        registry.save(self.skills_path())
    }
}
