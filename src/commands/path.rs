//! Shortest-path command
//!
//! `trazo path <START> <END>` runs the Dijkstra engine over the selected
//! graph and renders the run: the numbered step log, the distance table,
//! and the final path. With `--replay` the step log is paced by the
//! ticker and Ctrl-C cancels cleanly between lines.

use std::path::Path;

use crate::cli::Cli;
use crate::commands::helpers;
use trazo_core::config::TrazoConfig;
use trazo_core::error::Result;
use trazo_core::format::OutputFormat;
use trazo_core::graph::{shortest_path, PathOutcome, ShortestPathRun};
use trazo_core::records::quoted;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    cli: &Cli,
    config: &TrazoConfig,
    format: OutputFormat,
    start: &str,
    end: &str,
    graph_path: Option<&Path>,
    replay: bool,
    speed: Option<u64>,
) -> Result<()> {
    let graph = helpers::load_graph(graph_path, config)?;
    let run = shortest_path(&graph, start, end)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&run)?);
        }
        OutputFormat::Human => print_human(cli, config, &run, replay, speed)?,
        OutputFormat::Records => print_records(&run),
    }

    Ok(())
}

fn print_human(
    cli: &Cli,
    config: &TrazoConfig,
    run: &ShortestPathRun,
    replay: bool,
    speed: Option<u64>,
) -> Result<()> {
    let lines = helpers::numbered(&run.trace_lines());
    if replay {
        helpers::replay_ticker(config, speed).play(&lines, |line| println!("{line}"))?;
    } else {
        for line in &lines {
            println!("{line}");
        }
    }

    if !cli.quiet {
        println!();
        println!("distances from {}:", run.start);
        for (node, distance) in &run.distances {
            let marker = if run.visited.contains(node) {
                " (visited)"
            } else {
                ""
            };
            println!("  {node}: {distance}{marker}");
        }
        println!();
    }

    match &run.outcome {
        PathOutcome::Found {
            path,
            total_distance,
            hops,
        } => println!(
            "path: {} (distance {total_distance}, {hops} hops)",
            path.join(" -> ")
        ),
        PathOutcome::NoPath => println!("no path from {} to {}", run.start, run.end),
    }

    Ok(())
}

fn print_records(run: &ShortestPathRun) {
    println!(
        "H trazo=1 records=1 mode=path start={} end={}",
        run.start, run.end
    );
    for (index, event) in run.trace.iter().enumerate() {
        println!("S {} {}", index + 1, quoted(&event.to_string()));
    }
    for (node, distance) in &run.distances {
        let value = distance
            .value()
            .map_or_else(|| "inf".to_string(), |v| v.to_string());
        println!("D {node} {value}");
    }
    match &run.outcome {
        PathOutcome::Found {
            path,
            total_distance,
            hops,
        } => {
            println!("P {}", path.join(" "));
            println!("R found=1 distance={total_distance} hops={hops}");
        }
        PathOutcome::NoPath => println!("R found=0"),
    }
}
