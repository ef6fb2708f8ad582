use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;

use crate::error::Result;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable formatted output with colors (default)
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
    /// Plain text without colors or formatting
    Plain,
}

impl OutputFormat {
    /// Check if this format should use colors
    #[must_use]
    pub const fn use_colors(&self) -> bool {
        matches!(self, Self::Human)
    }

    /// Check if this format is machine-readable
    #[must_use]
    pub const fn is_machine_readable(&self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Envelope for machine mode responses.
#[derive(Serialize)]
pub struct MachineResponse<T> {
    pub status: MachineStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MachineStatus {
    Ok,
}

/// Emit a value as pretty-printed JSON on stdout.
pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Emit a value wrapped in the machine response envelope.
pub fn emit_machine<T: Serialize>(data: T) -> Result<()> {
    emit_json(&MachineResponse {
        status: MachineStatus::Ok,
        timestamp: Utc::now(),
        version: crate::VERSION.to_string(),
        data,
    })
}
