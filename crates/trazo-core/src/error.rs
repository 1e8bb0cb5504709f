//! Error types and exit codes for trazo
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (IO, interrupted replay)
//! - 2: Usage error (bad flags/args, out-of-range numbers)
//! - 3: Data error (missing or invalid graph, unknown node)
//!
//! An unreachable destination is NOT an error: the shortest-path engine
//! reports it as a distinguished outcome value and the process exits 0.

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the trazo binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing graph file, invalid graph, unknown node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during trazo operations
#[derive(Error, Debug)]
pub enum TrazoError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("graph file not found: {path:?}")]
    GraphNotFound { path: PathBuf },

    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    #[error("node not found in graph: {id}")]
    NodeNotFound { id: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("replay interrupted")]
    Interrupted,

    #[error("{0}")]
    Other(String),
}

impl TrazoError {
    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        TrazoError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a graph that violates a structural invariant
    pub fn invalid_graph(reason: impl Into<String>) -> Self {
        TrazoError::InvalidGraph {
            reason: reason.into(),
        }
    }

    /// Create an error for a node missing from the graph
    pub fn node_not_found(id: impl Into<String>) -> Self {
        TrazoError::NodeNotFound { id: id.into() }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            TrazoError::UnknownFormat(_)
            | TrazoError::DuplicateFormat
            | TrazoError::UsageError(_)
            | TrazoError::InvalidValue { .. } => ExitCode::Usage,

            // Data errors
            TrazoError::GraphNotFound { .. }
            | TrazoError::InvalidGraph { .. }
            | TrazoError::NodeNotFound { .. } => ExitCode::Data,

            // Generic failures
            TrazoError::Io(_)
            | TrazoError::Json(_)
            | TrazoError::Toml(_)
            | TrazoError::Interrupted
            | TrazoError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            TrazoError::UnknownFormat(_) => "unknown_format",
            TrazoError::DuplicateFormat => "duplicate_format",
            TrazoError::UsageError(_) => "usage_error",
            TrazoError::InvalidValue { .. } => "invalid_value",
            TrazoError::GraphNotFound { .. } => "graph_not_found",
            TrazoError::InvalidGraph { .. } => "invalid_graph",
            TrazoError::NodeNotFound { .. } => "node_not_found",
            TrazoError::Io(_) => "io_error",
            TrazoError::Json(_) => "json_error",
            TrazoError::Toml(_) => "toml_error",
            TrazoError::Interrupted => "interrupted",
            TrazoError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for trazo operations
pub type Result<T> = std::result::Result<T, TrazoError>;
