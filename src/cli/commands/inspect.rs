//! tg inspect - parse an uploaded file and report what it contains.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::emit_machine;
use crate::error::Result;
use crate::fileio;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// File to inspect (.json/.yml/.yaml)
    pub path: PathBuf,

    /// Also print the parsed content
    #[arg(long)]
    pub content: bool,
}

#[derive(Serialize)]
struct InspectReport {
    path: String,
    format: String,
    has_graph_seed: bool,
    nodes: usize,
    edges: usize,
}

pub fn run(ctx: &AppContext, args: &InspectArgs) -> Result<()> {
    let document = fileio::read_document(&args.path)?;
    let seed = document.graph_seed();

    let report = InspectReport {
        path: document.path.display().to_string(),
        format: document.format.extension().to_string(),
        has_graph_seed: seed.is_some(),
        nodes: seed.as_ref().map_or(0, |g| g.skills.len()),
        edges: seed.as_ref().map_or(0, |g| g.edge_count()),
    };

    if ctx.machine_mode() {
        return emit_machine(serde_json::json!({
            "report": report,
            "content": document.value,
        }));
    }

    if ctx.output.use_colors() {
        println!("{} {}", "Uploaded:".bold(), report.path);
    } else {
        println!("Uploaded: {}", report.path);
    }
    println!("Format: {}", report.format);
    if report.has_graph_seed {
        println!(
            "Graph seed: {} nodes, {} edges",
            report.nodes, report.edges
        );
    } else {
        println!("Graph seed: none (no node-shaped `skills` field)");
    }

    if args.content {
        println!();
        println!("{}", document.pretty()?);
    }
    Ok(())
}
