//! tg build - merge a selection sheet with an optional existing graph.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tracing::{debug, info};

use crate::app::AppContext;
use crate::cli::output::emit_machine;
use crate::core::graph::{self, SkillGraph};
use crate::error::Result;
use crate::fileio::{self, FileFormat};

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Selection sheet file (.json/.yml/.yaml)
    #[arg(long, short)]
    pub selections: PathBuf,

    /// Previously exported graph to merge into
    #[arg(long, short)]
    pub existing: Option<PathBuf>,

    /// Export format (default: config export.default_format)
    #[arg(long, short, value_enum)]
    pub format: Option<FileFormat>,

    /// Output directory (default: config export.dir)
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Print the graph to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Serialize)]
struct BuildReport<'a> {
    graph: &'a SkillGraph,
    nodes: usize,
    edges: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    written: Option<String>,
}

pub fn run(ctx: &AppContext, args: &BuildArgs) -> Result<()> {
    let sheet = fileio::read_sheet(&args.selections)?;

    let existing = match &args.existing {
        Some(path) => {
            let document = fileio::read_document(path)?;
            let seed = document.graph_seed();
            if seed.is_none() {
                debug!(path = %path.display(), "existing file carries no graph seed");
            }
            seed
        }
        None => None,
    };

    let registry = ctx.load_registry()?;
    let resolved = sheet.resolve(&registry);
    info!(
        pairings = sheet.pairings.len(),
        active = resolved.len(),
        "building connection graph"
    );

    let graph = graph::build(existing.as_ref(), &resolved, &sheet.members);

    let format = match args.format {
        Some(format) => format,
        None => FileFormat::parse_name(&ctx.config.export.default_format)?,
    };

    let written = if args.stdout {
        None
    } else {
        let dir = args
            .out
            .clone()
            .unwrap_or_else(|| ctx.config.export.dir.clone());
        Some(fileio::write_export(&graph, format, &dir)?)
    };

    if ctx.machine_mode() {
        return emit_machine(BuildReport {
            graph: &graph,
            nodes: graph.skills.len(),
            edges: graph.edge_count(),
            written: written.as_ref().map(|p| p.display().to_string()),
        });
    }

    if args.stdout {
        println!("{}", fileio::render_graph(&graph, format)?);
        return Ok(());
    }

    let summary = format!(
        "{} nodes, {} edges",
        graph.skills.len(),
        graph.edge_count()
    );
    if ctx.output.use_colors() {
        println!("{} {}", "Graph built:".green().bold(), summary);
    } else {
        println!("Graph built: {summary}");
    }
    if let Some(path) = written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
