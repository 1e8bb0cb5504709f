//! Command dispatch logic for trazo

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use trazo_core::config::TrazoConfig;
use trazo_core::error::{Result, TrazoError};
use trazo_core::format::OutputFormat;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = TrazoConfig::load(&cli.config)?;
    let format = resolve_format(cli, &config)?;

    if cli.verbose {
        eprintln!("load_config: {:?}", start.elapsed());
    }

    match &cli.command {
        None => Err(TrazoError::UsageError(
            "no command given (see: trazo --help)".to_string(),
        )),

        Some(Commands::Path {
            start: from,
            end,
            graph,
            replay,
            speed,
        }) => commands::path::execute(
            cli,
            &config,
            format,
            from,
            end,
            graph.as_deref(),
            *replay,
            *speed,
        ),

        Some(Commands::Gcd {
            numbers,
            replay,
            speed,
        }) => commands::gcd::execute(cli, &config, format, numbers, *replay, *speed),

        Some(Commands::Graph { graph, sample }) => {
            commands::graph::execute(cli, &config, format, graph.as_deref(), *sample)
        }
    }
}

/// CLI flag wins, then the config file, then the built-in default.
fn resolve_format(cli: &Cli, config: &TrazoConfig) -> Result<OutputFormat> {
    match cli.format {
        Some(format) => Ok(format),
        None => match &config.output.format {
            Some(name) => name.parse(),
            None => Ok(OutputFormat::default()),
        },
    }
}
