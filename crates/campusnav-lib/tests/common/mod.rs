//! Common test utilities and graph fixtures.
//!
//! Provides the triangle graph used by the concrete scenarios, a small
//! deterministic generator for synthetic graphs, and a brute-force reference
//! solver to compare the engine against.

#![allow(dead_code)]

use std::collections::HashSet;

use campusnav_lib::{CampusGraph, Location};

/// `{A:{B:1,C:4}, B:{A:1,C:2}, C:{A:4,B:2}}`
pub fn triangle() -> CampusGraph {
    CampusGraph::builder()
        .edge("A", "B", 1.0)
        .edge("A", "C", 4.0)
        .edge("B", "A", 1.0)
        .edge("B", "C", 2.0)
        .edge("C", "A", 4.0)
        .edge("C", "B", 2.0)
        .build()
        .expect("triangle graph is valid")
}

pub fn excluded(names: &[&str]) -> HashSet<Location> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Tiny linear congruential generator so synthetic graphs are reproducible.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed.wrapping_mul(6364136223846793005).wrapping_add(1))
    }

    pub fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    pub fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

pub fn node_name(index: usize) -> String {
    format!("N{index}")
}

/// Random graph with `nodes` locations; roughly `density`% of ordered pairs
/// get an integer weight in 0..10. Some edges are one-way.
pub fn synthetic_graph(seed: u64, nodes: usize, density: u64) -> CampusGraph {
    let mut rng = Lcg::new(seed);
    let mut builder = CampusGraph::builder();
    for index in 0..nodes {
        builder = builder.location(node_name(index));
    }
    for from in 0..nodes {
        for to in 0..nodes {
            if from != to && rng.below(100) < density {
                let weight = rng.below(10) as f64;
                builder = builder.edge(node_name(from), node_name(to), weight);
            }
        }
    }
    builder.build().expect("synthetic graph is valid")
}

/// Minimum path cost by enumerating every simple path, or `None` if unreachable.
pub fn brute_force_distance(
    graph: &CampusGraph,
    start: &str,
    end: &str,
    excluded: &HashSet<Location>,
) -> Option<f64> {
    if !graph.contains(start) || !graph.contains(end) {
        return None;
    }
    if excluded.contains(start) || excluded.contains(end) {
        return None;
    }

    let mut best: Option<f64> = None;
    let mut on_path: HashSet<String> = HashSet::new();
    on_path.insert(start.to_string());
    explore(graph, start, end, excluded, 0.0, &mut on_path, &mut best);
    best
}

fn explore(
    graph: &CampusGraph,
    current: &str,
    end: &str,
    excluded: &HashSet<Location>,
    cost: f64,
    on_path: &mut HashSet<String>,
    best: &mut Option<f64>,
) {
    if current == end {
        if best.map_or(true, |b| cost < b) {
            *best = Some(cost);
        }
        return;
    }

    for (next, weight) in graph.neighbours(current) {
        if excluded.contains(next) || on_path.contains(next) || !graph.contains(next) {
            continue;
        }
        on_path.insert(next.to_string());
        explore(graph, next, end, excluded, cost + weight, on_path, best);
        on_path.remove(next);
    }
}

/// Sum the declared edge weights along `path`, or `None` if a step is not an edge.
pub fn path_cost(graph: &CampusGraph, path: &[Location]) -> Option<f64> {
    path.windows(2)
        .map(|pair| graph.edge_weight(&pair[0], &pair[1]))
        .sum()
}
