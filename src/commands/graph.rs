//! Graph inspection command
//!
//! `trazo graph` shows the selected graph document; `--sample` prints the
//! built-in demo graph as JSON so it can be saved, edited, and fed back
//! via `--graph`.

use std::path::Path;

use crate::cli::Cli;
use crate::commands::helpers;
use trazo_core::config::TrazoConfig;
use trazo_core::error::Result;
use trazo_core::format::OutputFormat;
use trazo_core::graph::Graph;

pub fn execute(
    cli: &Cli,
    config: &TrazoConfig,
    format: OutputFormat,
    graph_path: Option<&Path>,
    sample: bool,
) -> Result<()> {
    if sample {
        println!("{}", serde_json::to_string_pretty(&Graph::sample())?);
        return Ok(());
    }

    let graph = helpers::load_graph(graph_path, config)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&graph)?);
        }
        OutputFormat::Human => {
            println!("{} nodes, {} edges", graph.nodes.len(), graph.edges.len());
            if !cli.quiet {
                for node in &graph.nodes {
                    println!("  node {} at ({}, {})", node.id, node.x, node.y);
                }
                for edge in &graph.edges {
                    println!(
                        "  edge {} -- {} weight {}",
                        edge.source, edge.target, edge.weight
                    );
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H trazo=1 records=1 mode=graph nodes={} edges={}",
                graph.nodes.len(),
                graph.edges.len()
            );
            for node in &graph.nodes {
                println!("N {} {} {}", node.id, node.x, node.y);
            }
            for edge in &graph.edges {
                println!("E {} {} {}", edge.source, edge.target, edge.weight);
            }
        }
    }

    Ok(())
}
