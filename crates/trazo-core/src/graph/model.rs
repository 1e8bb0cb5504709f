//! Graph data model
//!
//! A `Graph` is one immutable snapshot per engine invocation: the engines
//! never mutate it and incremental updates are a caller concern.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrazoError};

/// A graph node. The position is presentation-only: renderers use it for
/// layout, the algorithms never read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// An undirected weighted edge, traversable from either endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub weight: u64,
}

impl Edge {
    /// The endpoint opposite `id`, if `id` is one of the endpoints.
    pub fn other_endpoint(&self, id: &str) -> Option<&str> {
        if self.source == id {
            Some(self.target.as_str())
        } else if self.target == id {
            Some(self.source.as_str())
        } else {
            None
        }
    }

    /// Endpoint pair with orientation normalized away, for duplicate checks.
    fn unordered_pair(&self) -> (&str, &str) {
        if self.source <= self.target {
            (&self.source, &self.target)
        } else {
            (&self.target, &self.source)
        }
    }
}

/// A weighted undirected graph snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Parse and validate a graph JSON document.
    pub fn from_json(raw: &str) -> Result<Graph> {
        let graph: Graph =
            serde_json::from_str(raw).map_err(|e| TrazoError::invalid_graph(e.to_string()))?;
        graph.validate()?;
        Ok(graph)
    }

    /// Whether a node with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// All node ids in declaration order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    /// Edges incident to `id` as `(neighbor, weight)` pairs, covering both
    /// orientations of each undirected edge. Sorted by neighbor id so
    /// traversal order is deterministic.
    pub fn incident_edges(&self, id: &str) -> Vec<(&str, u64)> {
        let mut incident: Vec<(&str, u64)> = self
            .edges
            .iter()
            .filter_map(|e| e.other_endpoint(id).map(|n| (n, e.weight)))
            .collect();
        incident.sort_by(|a, b| a.0.cmp(b.0));
        incident
    }

    /// Check the structural invariants: unique node ids, both endpoints of
    /// every edge present, strictly positive weights, no self-loops, and no
    /// two edges sharing the same unordered endpoint pair.
    pub fn validate(&self) -> Result<()> {
        let mut ids: HashSet<&str> = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if node.id.is_empty() {
                return Err(TrazoError::invalid_graph("empty node id"));
            }
            if !ids.insert(node.id.as_str()) {
                return Err(TrazoError::invalid_graph(format!(
                    "duplicate node id: {}",
                    node.id
                )));
            }
        }

        let mut pairs: HashSet<(&str, &str)> = HashSet::with_capacity(self.edges.len());
        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !ids.contains(endpoint.as_str()) {
                    return Err(TrazoError::invalid_graph(format!(
                        "edge {}-{} references unknown node: {}",
                        edge.source, edge.target, endpoint
                    )));
                }
            }
            if edge.source == edge.target {
                return Err(TrazoError::invalid_graph(format!(
                    "self-loop on node: {}",
                    edge.source
                )));
            }
            if edge.weight == 0 {
                return Err(TrazoError::invalid_graph(format!(
                    "edge {}-{} has non-positive weight",
                    edge.source, edge.target
                )));
            }
            if !pairs.insert(edge.unordered_pair()) {
                return Err(TrazoError::invalid_graph(format!(
                    "duplicate edge between {} and {}",
                    edge.source, edge.target
                )));
            }
        }

        Ok(())
    }

    /// The built-in seven-node demo graph.
    pub fn sample() -> Graph {
        let nodes = [
            ("A", 140.0, 100.0),
            ("B", 340.0, 60.0),
            ("C", 540.0, 100.0),
            ("D", 140.0, 260.0),
            ("E", 340.0, 200.0),
            ("F", 540.0, 260.0),
            ("G", 340.0, 360.0),
        ];
        let edges = [
            ("A", "B", 4),
            ("A", "D", 2),
            ("B", "C", 3),
            ("B", "E", 1),
            ("C", "F", 2),
            ("D", "E", 5),
            ("E", "F", 2),
            ("D", "G", 3),
            ("E", "G", 1),
            ("F", "G", 4),
            ("A", "E", 6),
            ("C", "E", 3),
        ];

        Graph {
            nodes: nodes
                .iter()
                .map(|&(id, x, y)| Node {
                    id: id.to_string(),
                    x,
                    y,
                })
                .collect(),
            edges: edges
                .iter()
                .map(|&(source, target, weight)| Edge {
                    source: source.to_string(),
                    target: target.to_string(),
                    weight,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(nodes: &[&str], edges: &[(&str, &str, u64)]) -> Graph {
        Graph {
            nodes: nodes
                .iter()
                .map(|&id| Node {
                    id: id.to_string(),
                    x: 0.0,
                    y: 0.0,
                })
                .collect(),
            edges: edges
                .iter()
                .map(|&(s, t, w)| Edge {
                    source: s.to_string(),
                    target: t.to_string(),
                    weight: w,
                })
                .collect(),
        }
    }

    #[test]
    fn test_sample_graph_is_valid() {
        let sample = Graph::sample();
        sample.validate().unwrap();
        assert_eq!(sample.nodes.len(), 7);
        assert_eq!(sample.edges.len(), 12);
    }

    #[test]
    fn test_incident_edges_cover_both_orientations() {
        let sample = Graph::sample();
        // E touches B, C, D, F, G via explicit edges plus A-E
        let neighbors: Vec<&str> = sample.incident_edges("E").iter().map(|&(n, _)| n).collect();
        assert_eq!(neighbors, vec!["A", "B", "C", "D", "F", "G"]);
    }

    #[test]
    fn test_duplicate_node_id_rejected() {
        let g = graph(&["A", "A"], &[]);
        assert!(g.validate().is_err());
    }

    #[test]
    fn test_unknown_endpoint_rejected() {
        let g = graph(&["A", "B"], &[("A", "Z", 1)]);
        assert!(g.validate().is_err());
    }

    #[test]
    fn test_zero_weight_rejected() {
        let g = graph(&["A", "B"], &[("A", "B", 0)]);
        assert!(g.validate().is_err());
    }

    #[test]
    fn test_self_loop_rejected() {
        let g = graph(&["A"], &[("A", "A", 1)]);
        assert!(g.validate().is_err());
    }

    #[test]
    fn test_duplicate_unordered_pair_rejected() {
        // Same pair in the opposite orientation still counts as a duplicate
        let g = graph(&["A", "B"], &[("A", "B", 1), ("B", "A", 2)]);
        assert!(g.validate().is_err());
    }

    #[test]
    fn test_from_json_parses_the_document_format() {
        let raw = r#"{
            "nodes": [{"id": "A", "x": 1, "y": 2}, {"id": "B"}],
            "edges": [{"source": "A", "target": "B", "weight": 3}]
        }"#;
        let g = Graph::from_json(raw).unwrap();
        assert!(g.contains("A"));
        assert_eq!(g.edges[0].weight, 3);
        // Missing coordinates default to the origin
        assert_eq!(g.nodes[1].x, 0.0);
    }

    #[test]
    fn test_from_json_rejects_invalid_documents() {
        assert!(Graph::from_json("not json").is_err());
        let bad_weight = r#"{
            "nodes": [{"id": "A"}, {"id": "B"}],
            "edges": [{"source": "A", "target": "B", "weight": 0}]
        }"#;
        assert!(Graph::from_json(bad_weight).is_err());
    }
}
