//! Configuration for trazo
//!
//! Settings load from an optional `trazo.toml` in the working directory
//! (or the path given via `--config`). A missing file yields defaults;
//! CLI flags override file values.
//!
//! ```toml
//! [replay]
//! speed_ms = 800
//!
//! [graph]
//! file = "graph.json"
//!
//! [output]
//! format = "json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default delay between replayed trace lines, in milliseconds.
/// Matches the midpoint of the replay speed range (300-2000 ms).
pub const DEFAULT_SPEED_MS: u64 = 1000;

/// Top-level trazo configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrazoConfig {
    pub replay: ReplayConfig,
    pub graph: GraphConfig,
    pub output: OutputConfig,
}

/// Replay pacing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    /// Milliseconds between replayed trace lines
    pub speed_ms: u64,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        ReplayConfig {
            speed_ms: DEFAULT_SPEED_MS,
        }
    }
}

/// Default graph document settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Graph document used when `--graph` is not given.
    /// The built-in sample graph is used when this is unset too.
    pub file: Option<PathBuf>,
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format name (human, json, records)
    pub format: Option<String>,
}

impl TrazoConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(TrazoConfig::default());
        }
        let raw = fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }
}
