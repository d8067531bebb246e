//! `bptree-dot [DATAFILE]` — render a tree description as a DOT document.

use crate::cli::output::{self, OutputConfig, Styled};
use crate::cli::Cli;
use crate::input;
use anyhow::{Context, Result};
use bptree_dot::{BPlusTree, DotGraph, GraphSummary, RenderOptions};
use serde::Serialize;
use std::time::Instant;
use tracing::info;

/// Shape of `--json` output.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    summary: GraphSummary,
    dot: &'a str,
}

/// Run the render command.
///
/// The whole document is generated before anything is written, so a failure
/// never leaves partial output behind.
pub fn run(cli: &Cli, out: &OutputConfig) -> Result<()> {
    let start = Instant::now();

    let document = input::load_document(cli.datafile.as_deref())?;
    let tree = BPlusTree::from_document(document).context("invalid tree description")?;
    let options = RenderOptions::default()
        .with_placeholder(cli.placeholder.as_str())
        .with_escape_keys(cli.escape_keys);
    let graph = DotGraph::generate(&tree, &options).context("failed to generate graph")?;

    let dot = graph.render();
    let summary = graph.summary();
    info!(
        blocks = summary.blocks,
        parent_child_edges = summary.parent_child_edges,
        cross_edges = summary.cross_edges,
        "rendered tree"
    );

    let text = if out.json {
        serde_json::to_string_pretty(&JsonReport {
            summary,
            dot: &dot,
        })?
    } else {
        dot
    };
    output::write_text(cli.output.as_deref(), &text)?;

    let to_file = cli.output.is_some() && !out.json;
    if !out.quiet && (out.verbose || to_file) {
        output::print_summary(
            &Styled::new(out.color),
            &summary,
            &output::destination_name(cli.output.as_deref()),
            start.elapsed().as_millis(),
        );
    }

    Ok(())
}
