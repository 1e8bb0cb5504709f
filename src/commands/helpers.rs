//! Shared helpers for command implementations

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use trazo_core::config::TrazoConfig;
use trazo_core::error::{Result, TrazoError};
use trazo_core::graph::Graph;
use trazo_core::replay::Ticker;

/// Load the graph snapshot for a command: the explicit `--graph` path,
/// then the configured default file, then the built-in sample graph.
pub fn load_graph(path: Option<&Path>, config: &TrazoConfig) -> Result<Graph> {
    let source = path.or(config.graph.file.as_deref());
    match source {
        Some(path) => {
            if !path.exists() {
                return Err(TrazoError::GraphNotFound {
                    path: path.to_path_buf(),
                });
            }
            let raw = fs::read_to_string(path)?;
            let graph = Graph::from_json(&raw)?;
            tracing::debug!(path = %path.display(), nodes = graph.nodes.len(), "graph loaded");
            Ok(graph)
        }
        None => Ok(Graph::sample()),
    }
}

/// Build a replay ticker wired to Ctrl-C for cooperative cancellation.
pub fn replay_ticker(config: &TrazoConfig, speed: Option<u64>) -> Ticker {
    let delay = Duration::from_millis(speed.unwrap_or(config.replay.speed_ms));
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    let _ = ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
    });
    Ticker::new(delay).with_interrupt(interrupted)
}

/// Number step lines the way the original roadbook panel does.
pub fn numbered(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| format!("{:>3}. {}", index + 1, line))
        .collect()
}

/// Join numbers with a separator for display and records fields.
pub fn join_numbers(values: &[u64], separator: &str) -> String {
    values
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
