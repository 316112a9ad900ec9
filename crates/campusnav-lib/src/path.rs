use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use serde::Serialize;

use crate::graph::{CampusGraph, Location, WorkingGraph};

/// Distance reported when no path connects the endpoints.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Result of a single shortest-path query.
///
/// An unreachable result carries [`UNREACHABLE`] and an empty path; it is a
/// value, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    pub distance: f64,
    pub path: Vec<Location>,
}

impl ShortestPath {
    pub fn unreachable() -> Self {
        Self {
            distance: UNREACHABLE,
            path: Vec::new(),
        }
    }

    /// Whether a path was found. An empty path is the only unreachable result.
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Find the least-cost path from `start` to `end` with `excluded` nodes removed.
///
/// Exclusions are applied up front by deriving a [`WorkingGraph`]; the base
/// graph is only read. Endpoints that are unknown or excluded produce an
/// unreachable result. `start == end` yields a zero-cost single-node path;
/// rejecting that case is left to the caller.
pub fn shortest_path(
    graph: &CampusGraph,
    start: &str,
    end: &str,
    excluded: &HashSet<Location>,
) -> ShortestPath {
    let working = graph.working_graph(excluded);
    find_route_dijkstra(&working, start, end)
}

/// Run Dijkstra's algorithm over an already-filtered working graph.
///
/// Frontier entries carry the path walked so far; the first time `end` is
/// popped its distance is minimal because weights are non-negative.
pub fn find_route_dijkstra(working: &WorkingGraph, start: &str, end: &str) -> ShortestPath {
    if !working.contains(start) || !working.contains(end) {
        tracing::debug!(start, end, "endpoint missing from working graph");
        return ShortestPath::unreachable();
    }

    let mut visited: HashSet<Location> = HashSet::new();
    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry::new(0.0, start.to_string(), Vec::new()));

    while let Some(FrontierEntry { cost, node, mut path }) = frontier.pop() {
        if visited.contains(&node) {
            continue;
        }
        visited.insert(node.clone());
        path.push(node.clone());

        if node == end {
            tracing::debug!(distance = cost.0, hops = path.len() - 1, "route found");
            return ShortestPath {
                distance: cost.0,
                path,
            };
        }

        for (neighbour, weight) in working.neighbours(&node) {
            if !visited.contains(neighbour) {
                frontier.push(FrontierEntry::new(
                    cost.0 + weight,
                    neighbour.to_string(),
                    path.clone(),
                ));
            }
        }
    }

    tracing::debug!(start, end, visited = visited.len(), "frontier exhausted");
    ShortestPath::unreachable()
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

#[derive(Clone, Debug)]
struct FrontierEntry {
    cost: FloatOrd,
    node: Location,
    path: Vec<Location>,
}

impl FrontierEntry {
    fn new(cost: f64, node: Location, path: Vec<Location>) -> Self {
        Self {
            cost: FloatOrd(cost),
            node,
            path,
        }
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}
