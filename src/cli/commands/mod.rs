//! Command handlers.

pub mod build;
pub mod catalog;
pub mod inspect;
pub mod skill;

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

/// Dispatch a parsed command to its handler.
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Build(args) => build::run(ctx, args),
        Commands::Inspect(args) => inspect::run(ctx, args),
        Commands::Skill(args) => skill::run(ctx, args),
        Commands::Catalog(args) => catalog::run(ctx, args),
    }
}
