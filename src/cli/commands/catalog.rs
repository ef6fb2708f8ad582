//! tg catalog - fetch and inspect the remote skill catalog.

use clap::{Args, Subcommand};
use colored::Colorize;
use itertools::Itertools;

use crate::app::AppContext;
use crate::catalog::{CatalogClient, group_by_employee};
use crate::cli::output::emit_machine;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// Fetch the catalog and show it grouped by employee
    Fetch(CatalogFetchArgs),
}

#[derive(Args, Debug)]
pub struct CatalogFetchArgs {
    /// Catalog URL (default: config catalog.url)
    #[arg(long)]
    pub url: Option<String>,

    /// Merge fetched records into the local registry
    #[arg(long)]
    pub merge: bool,
}

pub fn run(ctx: &AppContext, args: &CatalogArgs) -> Result<()> {
    match &args.command {
        CatalogCommand::Fetch(fetch) => run_fetch(ctx, fetch),
    }
}

fn run_fetch(ctx: &AppContext, args: &CatalogFetchArgs) -> Result<()> {
    let client = CatalogClient::from_config(&ctx.config.catalog, args.url.as_deref())?;
    let records = client.fetch()?;
    let fetched = records.len();

    let merged = if args.merge {
        let mut registry = ctx.load_registry()?;
        let added = registry.merge(records.clone());
        ctx.save_registry(&registry)?;
        Some(added)
    } else {
        None
    };

    let grouped = group_by_employee(records);

    if ctx.machine_mode() {
        return emit_machine(serde_json::json!({
            "url": client.url(),
            "fetched": fetched,
            "merged": merged,
            "employees": grouped,
        }));
    }

    println!("Fetched {fetched} skills from {}", client.url());
    if let Some(added) = merged {
        println!("Merged {added} new skills into the local registry");
    }
    println!();

    for employee in grouped.keys().sorted() {
        let skills = &grouped[employee];
        if ctx.output.use_colors() {
            println!("{}", format!("Employee {employee}").bold());
        } else {
            println!("Employee {employee}");
        }
        for skill in skills {
            println!("  {} ({})", skill.expertise, skill.experience);
        }
    }
    Ok(())
}
