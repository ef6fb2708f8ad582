//! Layered TOML configuration.
//!
//! Defaults, then the global file (`~/.config/tg/config.toml`), then the
//! project file (`<root>/config.toml`), then an explicit `--config` path or
//! `TG_CONFIG`, then `TG_*` environment overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TgError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub skills: SkillsConfig,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>, root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("TG_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("tg/config.toml"))
    }

    fn load_project(root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&root.join("config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| TgError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| TgError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.catalog {
            self.catalog.merge(patch);
        }
        if let Some(patch) = patch.export {
            self.export.merge(patch);
        }
        if let Some(patch) = patch.skills {
            self.skills.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("TG_CATALOG_URL") {
            self.catalog.url = url;
        }
        if let Ok(dir) = std::env::var("TG_EXPORT_DIR") {
            self.export.dir = PathBuf::from(dir);
        }
        if let Ok(format) = std::env::var("TG_EXPORT_FORMAT") {
            self.export.default_format = format;
        }
        if let Ok(path) = std::env::var("TG_SKILLS_PATH") {
            self.skills.path = Some(PathBuf::from(path));
        }
    }
}

/// Remote skill catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// URL of the static catalog resource. Empty means unconfigured.
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CatalogConfig {
    fn merge(&mut self, patch: CatalogPatch) {
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(timeout) = patch.timeout_secs {
            self.timeout_secs = timeout;
        }
    }
}

/// Export destination settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_dir")]
    pub dir: PathBuf,
    /// "json", "yml", or "yaml".
    #[serde(default = "default_export_format")]
    pub default_format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
            default_format: default_export_format(),
        }
    }
}

impl ExportConfig {
    fn merge(&mut self, patch: ExportPatch) {
        if let Some(dir) = patch.dir {
            self.dir = dir;
        }
        if let Some(format) = patch.default_format {
            self.default_format = format;
        }
    }
}

/// Local skill registry storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillsConfig {
    /// Registry file path; defaults to `<root>/skills.json` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl SkillsConfig {
    fn merge(&mut self, patch: SkillsPatch) {
        if let Some(path) = patch.path {
            self.path = Some(path);
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    catalog: Option<CatalogPatch>,
    export: Option<ExportPatch>,
    skills: Option<SkillsPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogPatch {
    url: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct ExportPatch {
    dir: Option<PathBuf>,
    default_format: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SkillsPatch {
    path: Option<PathBuf>,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_export_format() -> String {
    "json".to_string()
}
