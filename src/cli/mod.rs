//! CLI argument parsing for trazo
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level,
//! --log-json, --config

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use trazo_core::format::OutputFormat;
use parse::parse_format;
use trazo_core::gcd::MAX_VALUE;

/// Trazo - step-traced algorithm runs in the terminal
///
/// Watch Dijkstra shortest-path and Euclidean GCD runs one decision at a
/// time: every visit, relaxation, and division is logged and replayable.
#[derive(Parser, Debug)]
#[command(name = "trazo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records; default: human)
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file
    #[arg(long, global = true, env = "TRAZO_CONFIG", default_value = "trazo.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the shortest-path engine and show its step trace
    Path {
        /// Start node id
        start: String,

        /// Destination node id
        end: String,

        /// Graph document (JSON); the built-in sample graph when omitted
        #[arg(long)]
        graph: Option<PathBuf>,

        /// Replay the step trace line by line instead of printing at once
        #[arg(long)]
        replay: bool,

        /// Milliseconds between replayed lines (overrides config)
        #[arg(long)]
        speed: Option<u64>,
    },

    /// Reduce 2-6 positive integers to their combined GCD
    Gcd {
        /// Numbers to reduce, in order (each 1-9999)
        #[arg(num_args = 2..=6, value_parser = parse_gcd_number)]
        numbers: Vec<u64>,

        /// Replay the division steps one by one
        #[arg(long)]
        replay: bool,

        /// Milliseconds between replayed lines (overrides config)
        #[arg(long)]
        speed: Option<u64>,
    },

    /// Inspect a graph document
    Graph {
        /// Graph document (JSON); the built-in sample graph when omitted
        #[arg(long)]
        graph: Option<PathBuf>,

        /// Print the built-in sample graph as JSON and exit
        #[arg(long)]
        sample: bool,
    },
}

fn parse_gcd_number(raw: &str) -> Result<u64, String> {
    let value: u64 = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a positive integer"))?;
    if value == 0 || value > MAX_VALUE {
        return Err(format!("{value} is out of range (expected 1-{MAX_VALUE})"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gcd_number_bounds() {
        assert_eq!(parse_gcd_number("1").unwrap(), 1);
        assert_eq!(parse_gcd_number("9999").unwrap(), 9999);
        assert!(parse_gcd_number("0").is_err());
        assert!(parse_gcd_number("10000").is_err());
        assert!(parse_gcd_number("-3").is_err());
        assert!(parse_gcd_number("twelve").is_err());
    }
}
