//! File import and export.
//!
//! Format is chosen by file extension: `.json` is JSON, `.yml`/`.yaml` is
//! YAML, anything else is rejected. Imports parse into an arbitrary value;
//! a `skills` field shaped as a node list seeds the existing graph. Exports
//! write the computed graph as `updated-data.<ext>`.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::warn;

use crate::core::graph::{SkillGraph, SkillNode};
use crate::core::pairing::SelectionSheet;
use crate::error::{Result, TgError};

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FileFormat {
    Json,
    #[value(alias = "yml")]
    Yaml,
}

impl FileFormat {
    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("json") => Ok(Self::Json),
            Some("yml" | "yaml") => Ok(Self::Yaml),
            _ => Err(TgError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// The extension used for export files.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yml",
        }
    }

    /// Parse config-level format names ("json", "yml", "yaml").
    pub fn parse_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yml" | "yaml" => Ok(Self::Yaml),
            other => Err(TgError::Config(format!(
                "unknown export format '{other}' (expected json, yml, or yaml)"
            ))),
        }
    }
}

/// A parsed upload: the raw value plus where it came from.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub format: FileFormat,
    pub value: serde_json::Value,
}

impl Document {
    /// Extract an existing-graph seed, if the document carries one.
    ///
    /// Only a `skills` field shaped as a sequence of nodes seeds the graph;
    /// any other shape means no seed, not an error.
    #[must_use]
    pub fn graph_seed(&self) -> Option<SkillGraph> {
        let skills = self.value.get("skills")?;
        match serde_json::from_value::<Vec<SkillNode>>(skills.clone()) {
            Ok(skills) => Some(SkillGraph { skills }),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    "skills field present but not node-shaped: {err}"
                );
                None
            }
        }
    }

    /// Pretty-printed JSON rendering of the parsed content.
    pub fn pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.value)?)
    }
}

/// Read and parse an uploaded file.
pub fn read_document(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let format = FileFormat::from_path(path)?;
    let raw = std::fs::read_to_string(path)?;

    let value = match format {
        FileFormat::Json => {
            serde_json::from_str(&raw).map_err(|err| TgError::InvalidDocument {
                path: path.display().to_string(),
                reason: err.to_string(),
            })?
        }
        FileFormat::Yaml => {
            serde_yaml::from_str(&raw).map_err(|err| TgError::InvalidDocument {
                path: path.display().to_string(),
                reason: err.to_string(),
            })?
        }
    };

    Ok(Document {
        path: path.to_path_buf(),
        format,
        value,
    })
}

/// Read a selection sheet from a JSON or YAML file.
pub fn read_sheet(path: impl AsRef<Path>) -> Result<SelectionSheet> {
    let document = read_document(&path)?;
    serde_json::from_value(document.value).map_err(|err| TgError::InvalidDocument {
        path: path.as_ref().display().to_string(),
        reason: format!("not a selection sheet: {err}"),
    })
}

/// Serialize a graph in the given format. JSON is pretty-printed.
pub fn render_graph(graph: &SkillGraph, format: FileFormat) -> Result<String> {
    match format {
        FileFormat::Json => Ok(serde_json::to_string_pretty(graph)?),
        FileFormat::Yaml => Ok(serde_yaml::to_string(graph)?),
    }
}

/// The conventional export file name for a format.
#[must_use]
pub fn export_file_name(format: FileFormat) -> String {
    format!("updated-data.{}", format.extension())
}

/// Write the graph to `updated-data.<ext>` under `dir`, returning the path.
pub fn write_export(graph: &SkillGraph, format: FileFormat, dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }
    let path = dir.join(export_file_name(format));
    std::fs::write(&path, render_graph(graph, format)?)?;
    Ok(path)
}
