use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{LabeledGraph, VertexId};
use crate::network::{LocationId, RoadNetwork};

/// Supported search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchAlgorithm {
    /// Best-first search guided by straight-line distance to the goal.
    #[default]
    #[serde(rename = "a-star")]
    AStar,
    /// Uniform-cost search; ignores coordinates.
    Dijkstra,
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SearchAlgorithm::AStar => "a-star",
            SearchAlgorithm::Dijkstra => "dijkstra",
        };
        f.write_str(value)
    }
}

/// A minimum-length path between two vertices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    /// Vertices from start to goal, inclusive.
    pub vertices: Vec<VertexId>,
    /// Sum of the edge weights along the path.
    pub length: f64,
}

impl ShortestPath {
    /// Number of edges in the path.
    pub fn hop_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// Find the shortest path between two locations of a road network.
pub fn find_route(
    network: &RoadNetwork,
    start: LocationId,
    goal: LocationId,
    algorithm: SearchAlgorithm,
) -> Result<ShortestPath> {
    let weight = |u, v| network.weight(u, v);
    let found = match algorithm {
        SearchAlgorithm::AStar => a_star(network.graph(), start, goal, weight, |v| {
            network.straight_line_distance(v, goal)
        }),
        SearchAlgorithm::Dijkstra => a_star(network.graph(), start, goal, weight, |_| 0.0),
    };

    found.ok_or_else(|| Error::NoPathFound {
        start: network.display_name(start).to_string(),
        goal: network.display_name(goal).to_string(),
    })
}

/// Run A* search from `start` to `goal`.
///
/// `weight(u, v)` gives the cost of the edge `u -> v`; infinite or NaN
/// weights are never traversed. `heuristic(v)` estimates the remaining cost
/// from `v` to `goal` and must not overestimate it for the result to be
/// optimal. A zero heuristic turns this into Dijkstra's algorithm.
///
/// Returns `None` when `goal` cannot be reached or either vertex is not in
/// the graph.
pub fn a_star<V, E, W, H>(
    graph: &LabeledGraph<V, E>,
    start: VertexId,
    goal: VertexId,
    weight: W,
    heuristic: H,
) -> Option<ShortestPath>
where
    W: Fn(VertexId, VertexId) -> f64,
    H: Fn(VertexId) -> f64,
{
    let vertex_count = graph.vertex_count();
    if start >= vertex_count || goal >= vertex_count {
        return None;
    }
    if start == goal {
        return Some(ShortestPath {
            vertices: vec![start],
            length: 0.0,
        });
    }

    let mut g_score = vec![f64::INFINITY; vertex_count];
    let mut parents: Vec<Option<VertexId>> = vec![None; vertex_count];
    let mut queue = BinaryHeap::new();
    let mut expanded = 0usize;

    g_score[start] = 0.0;
    queue.push(AStarEntry::new(start, 0.0, heuristic(start)));

    while let Some(entry) = queue.pop() {
        let current_score = g_score[entry.node];
        if entry.cost.0 > current_score {
            continue;
        }

        if entry.node == goal {
            debug!(expanded, length = current_score, "search reached goal");
            return Some(ShortestPath {
                vertices: reconstruct_path(&parents, start, goal),
                length: current_score,
            });
        }
        expanded += 1;

        for (next, _) in graph.successors(entry.node) {
            let step = weight(entry.node, next);
            if !step.is_finite() {
                continue;
            }

            let tentative_g = current_score + step;
            if tentative_g < g_score[next] {
                g_score[next] = tentative_g;
                parents[next] = Some(entry.node);
                queue.push(AStarEntry::new(next, tentative_g, heuristic(next)));
            }
        }
    }

    debug!(expanded, "search exhausted frontier without reaching goal");
    None
}

fn reconstruct_path(parents: &[Option<VertexId>], start: VertexId, goal: VertexId) -> Vec<VertexId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents[node];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct AStarEntry {
    node: VertexId,
    cost: FloatOrd,
    estimate: FloatOrd,
}

impl AStarEntry {
    fn new(node: VertexId, cost: f64, heuristic: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
        }
    }
}

impl Ord for AStarEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by estimate;
        // equal estimates pop the lower vertex id first.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.node.cmp(&self.node))
            .then_with(|| other.cost.cmp(&self.cost))
    }
}

impl PartialOrd for AStarEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
