//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod output;

/// teamgraph - assign skills to team-member pairings and export the connection graph
#[derive(Parser, Debug)]
#[command(name = "tg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, plain)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Enable machine-readable JSON output (shorthand for --output-format=json)
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Force plain output (no colors)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/tg/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the effective output format.
    ///
    /// Priority order:
    /// 1. `--plain` → Plain format
    /// 2. `--output-format` → Explicit format
    /// 3. `--machine` → JSON format (shorthand)
    /// 4. Default → Human format
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        if self.plain {
            return OutputFormat::Plain;
        }
        if let Some(fmt) = self.output_format {
            return fmt;
        }
        if self.machine {
            return OutputFormat::Json;
        }
        OutputFormat::Human
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the connection graph from a selection sheet
    Build(commands::build::BuildArgs),

    /// Parse an uploaded file and report what it contains
    Inspect(commands::inspect::InspectArgs),

    /// Manage locally defined skills
    Skill(commands::skill::SkillArgs),

    /// Fetch and inspect the remote skill catalog
    Catalog(commands::catalog::CatalogArgs),
}
