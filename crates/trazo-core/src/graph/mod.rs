//! Weighted undirected graphs and the shortest-path engine
//!
//! - `model`: graph snapshot (nodes, weighted undirected edges) with
//!   structural validation and the built-in sample graph
//! - `dijkstra`: step-traced shortest-path runs over a graph snapshot

pub mod dijkstra;
pub mod model;

pub use dijkstra::{shortest_path, Distance, PathOutcome, ShortestPathRun, TraceEvent};
pub use model::{Edge, Graph, Node};
