//! Dijkstra shortest-path engine with a full step trace
//!
//! Runs the O(V^2) textbook variant over one graph snapshot: a linear scan
//! selects the unvisited node with minimum distance, the node is finalized,
//! and its incident edges are relaxed. Every decision is recorded as a
//! `TraceEvent` so a presentation layer can replay the run at its own pace.
//!
//! Ties in the minimum scan break to the lowest node id: ids are iterated
//! in sorted order and the minimum is replaced only on a strictly smaller
//! distance.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::error::{Result, TrazoError};
use crate::graph::model::Graph;

/// Path cost with an explicit infinity for unreached nodes.
///
/// Serializes as `null` when infinite, as a plain integer otherwise.
/// Infinity orders greater than every finite distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Distance(Option<u64>);

impl Distance {
    pub const INFINITY: Distance = Distance(None);
    pub const ZERO: Distance = Distance(Some(0));

    pub fn value(&self) -> Option<u64> {
        self.0
    }

    pub fn is_infinite(&self) -> bool {
        self.0.is_none()
    }
}

impl From<u64> for Distance {
    fn from(value: u64) -> Self {
        Distance(Some(value))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self.0, other.0) {
            (None, None) => std::cmp::Ordering::Equal,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (Some(_), None) => std::cmp::Ordering::Less,
            (Some(a), Some(b)) => a.cmp(&b),
        }
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => write!(f, "∞"),
        }
    }
}

/// One observable step of a shortest-path run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// Run begins
    Start { start: String, end: String },
    /// Distances initialized: start at 0, everything else infinite
    Init { start: String, nodes: usize },
    /// Node finalized with its confirmed shortest distance
    Visit { node: String, distance: u64 },
    /// Unvisited neighbors about to be examined
    Neighbors { node: String, pending: Vec<String> },
    /// Neighbor ignored because it is already finalized
    SkipVisited { node: String },
    /// A shorter path to `to` was found through `from`
    Relax {
        from: String,
        to: String,
        weight: u64,
        old: Distance,
        new: u64,
    },
    /// The candidate path was no better; the known distance stands
    Keep {
        from: String,
        to: String,
        weight: u64,
        candidate: u64,
        current: u64,
    },
    /// Terminal: shortest path reconstructed
    Found {
        path: Vec<String>,
        total_distance: u64,
        hops: usize,
    },
    /// Terminal: destination unreachable
    NoPath { start: String, end: String },
    /// Closing statistics
    Summary { visited: usize, nodes: usize },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Start { start, end } => {
                write!(f, "starting Dijkstra from {start} towards {end}")
            }
            TraceEvent::Init { start, nodes } => write!(
                f,
                "initial distances: {start}=0, all others ∞; {nodes} nodes unvisited"
            ),
            TraceEvent::Visit { node, distance } => {
                write!(f, "visiting {node}: minimum distance {distance}, marked visited")
            }
            TraceEvent::Neighbors { node, pending } => {
                if pending.is_empty() {
                    write!(f, "examining neighbors of {node}: none available")
                } else {
                    write!(f, "examining neighbors of {node}: {}", pending.join(", "))
                }
            }
            TraceEvent::SkipVisited { node } => {
                write!(f, "skipping {node}: already visited")
            }
            TraceEvent::Relax {
                from,
                to,
                weight,
                old,
                new,
            } => write!(
                f,
                "relaxing {from}->{to} (cost {weight}): distance {old} -> {new}, best path now via {from}"
            ),
            TraceEvent::Keep {
                from,
                to,
                weight,
                candidate,
                current,
            } => write!(
                f,
                "evaluating {from}->{to} (cost {weight}): candidate {candidate} vs current {current}, keeping current"
            ),
            TraceEvent::Found {
                path,
                total_distance,
                hops,
            } => write!(
                f,
                "shortest path found: {} (total distance {total_distance}, {hops} hops)",
                path.join(" -> ")
            ),
            TraceEvent::NoPath { start, end } => {
                write!(f, "no path exists from {start} to {end}")
            }
            TraceEvent::Summary { visited, nodes } => {
                write!(f, "visited {visited} of {nodes} nodes")
            }
        }
    }
}

/// Terminal outcome of a run. An unreachable destination is a normal
/// result, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum PathOutcome {
    Found {
        path: Vec<String>,
        total_distance: u64,
        hops: usize,
    },
    NoPath,
}

/// Immutable record of one shortest-path invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathRun {
    pub start: String,
    pub end: String,
    /// Final distance per node, infinite for unreached nodes
    pub distances: BTreeMap<String, Distance>,
    /// Predecessor on the best known path; absent for the start node and
    /// for unreached nodes
    pub previous: BTreeMap<String, String>,
    /// Nodes in finalization order
    pub visited: Vec<String>,
    pub trace: Vec<TraceEvent>,
    pub outcome: PathOutcome,
}

impl ShortestPathRun {
    /// The trace rendered as human-readable lines, in recorded order.
    pub fn trace_lines(&self) -> Vec<String> {
        self.trace.iter().map(ToString::to_string).collect()
    }
}

/// Run Dijkstra from `start` to `end` over one graph snapshot.
///
/// Both nodes must exist in the graph. `start == end` yields the trivial
/// zero-cost, zero-hop path with no visit steps beyond initialization.
#[tracing::instrument(skip(graph), fields(nodes = graph.nodes.len(), edges = graph.edges.len()))]
pub fn shortest_path(graph: &Graph, start: &str, end: &str) -> Result<ShortestPathRun> {
    graph.validate()?;
    for id in [start, end] {
        if !graph.contains(id) {
            return Err(TrazoError::node_not_found(id));
        }
    }

    let mut distances: BTreeMap<String, Distance> = graph
        .node_ids()
        .map(|id| (id.to_string(), Distance::INFINITY))
        .collect();
    distances.insert(start.to_string(), Distance::ZERO);
    let mut previous: BTreeMap<String, String> = BTreeMap::new();
    let mut unvisited: BTreeSet<String> = graph.node_ids().map(str::to_string).collect();
    let mut visited: Vec<String> = Vec::new();
    let mut trace: Vec<TraceEvent> = Vec::new();

    trace.push(TraceEvent::Start {
        start: start.to_string(),
        end: end.to_string(),
    });
    trace.push(TraceEvent::Init {
        start: start.to_string(),
        nodes: unvisited.len(),
    });

    if start == end {
        let path = vec![start.to_string()];
        trace.push(TraceEvent::Found {
            path: path.clone(),
            total_distance: 0,
            hops: 0,
        });
        trace.push(TraceEvent::Summary {
            visited: 0,
            nodes: graph.nodes.len(),
        });
        return Ok(ShortestPathRun {
            start: start.to_string(),
            end: end.to_string(),
            distances,
            previous,
            visited,
            trace,
            outcome: PathOutcome::Found {
                path,
                total_distance: 0,
                hops: 0,
            },
        });
    }

    while let Some((current, current_distance)) = select_next(&unvisited, &distances) {
        unvisited.remove(&current);
        visited.push(current.clone());
        trace.push(TraceEvent::Visit {
            node: current.clone(),
            distance: current_distance,
        });
        tracing::debug!(node = %current, distance = current_distance, "visit");

        if current == end {
            break;
        }

        relax_neighbors(
            graph,
            &current,
            current_distance,
            &unvisited,
            &mut distances,
            &mut previous,
            &mut trace,
        );
    }

    let outcome = match distances[end].value() {
        Some(total_distance) => {
            let path = reconstruct_path(start, end, &previous);
            let hops = path.len() - 1;
            trace.push(TraceEvent::Found {
                path: path.clone(),
                total_distance,
                hops,
            });
            PathOutcome::Found {
                path,
                total_distance,
                hops,
            }
        }
        None => {
            trace.push(TraceEvent::NoPath {
                start: start.to_string(),
                end: end.to_string(),
            });
            PathOutcome::NoPath
        }
    };
    trace.push(TraceEvent::Summary {
        visited: visited.len(),
        nodes: graph.nodes.len(),
    });

    Ok(ShortestPathRun {
        start: start.to_string(),
        end: end.to_string(),
        distances,
        previous,
        visited,
        trace,
        outcome,
    })
}

/// Examine every edge incident to the just-finalized node: record the
/// unvisited candidates, skip finalized neighbors, and relax where the
/// candidate distance improves on the known one.
fn relax_neighbors(
    graph: &Graph,
    current: &str,
    current_distance: u64,
    unvisited: &BTreeSet<String>,
    distances: &mut BTreeMap<String, Distance>,
    previous: &mut BTreeMap<String, String>,
    trace: &mut Vec<TraceEvent>,
) {
    let incident = graph.incident_edges(current);
    let pending: Vec<String> = incident
        .iter()
        .filter(|(neighbor, _)| unvisited.contains(*neighbor))
        .map(|&(neighbor, _)| neighbor.to_string())
        .collect();
    trace.push(TraceEvent::Neighbors {
        node: current.to_string(),
        pending,
    });

    for (neighbor, weight) in incident {
        if !unvisited.contains(neighbor) {
            trace.push(TraceEvent::SkipVisited {
                node: neighbor.to_string(),
            });
            continue;
        }

        let candidate = current_distance + weight;
        let known = distances[neighbor];
        match known.value() {
            Some(best) if candidate >= best => {
                trace.push(TraceEvent::Keep {
                    from: current.to_string(),
                    to: neighbor.to_string(),
                    weight,
                    candidate,
                    current: best,
                });
            }
            _ => {
                trace.push(TraceEvent::Relax {
                    from: current.to_string(),
                    to: neighbor.to_string(),
                    weight,
                    old: known,
                    new: candidate,
                });
                tracing::debug!(from = %current, to = neighbor, candidate, "relax");
                distances.insert(neighbor.to_string(), Distance::from(candidate));
                previous.insert(neighbor.to_string(), current.to_string());
            }
        }
    }
}

/// Linear scan for the unvisited node with minimum finite distance.
/// Iteration is in sorted id order and the minimum is replaced only on a
/// strictly smaller distance, so the lowest id wins ties.
fn select_next(
    unvisited: &BTreeSet<String>,
    distances: &BTreeMap<String, Distance>,
) -> Option<(String, u64)> {
    let mut best: Option<(&str, u64)> = None;
    for id in unvisited {
        if let Some(distance) = distances[id].value() {
            match best {
                Some((_, min)) if min <= distance => {}
                _ => best = Some((id.as_str(), distance)),
            }
        }
    }
    best.map(|(id, distance)| (id.to_string(), distance))
}

/// Walk the predecessor map backwards from `end` to `start`.
fn reconstruct_path(start: &str, end: &str, previous: &BTreeMap<String, String>) -> Vec<String> {
    let mut path = vec![end.to_string()];
    let mut current = end;
    while current != start {
        match previous.get(current) {
            Some(predecessor) => {
                path.push(predecessor.clone());
                current = predecessor;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
