use std::collections::HashSet;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// Case-sensitive name of a node in the campus graph.
pub type Location = String;

/// Neighbours of one location with their edge weights, in declaration order.
pub type Edges = IndexMap<Location, f64>;

/// Adjacency mapping: location -> (neighbour -> edge weight).
///
/// Keys keep the order they were declared in; name resolution and location
/// listings follow that order.
pub type Adjacency = IndexMap<Location, Edges>;

/// Immutable base graph shared between queries.
///
/// Edges are stored exactly as declared. A one-way declaration stays one-way;
/// nothing here symmetrises the data.
#[derive(Debug, Clone, PartialEq)]
pub struct CampusGraph {
    adjacency: Arc<Adjacency>,
}

impl CampusGraph {
    /// Validate and wrap an adjacency mapping.
    pub fn from_adjacency(adjacency: Adjacency) -> Result<Self> {
        if adjacency.is_empty() {
            return Err(Error::EmptyGraph);
        }

        // Every simple path costs at most the sum of all weights, so a finite
        // total keeps route distances finite.
        let mut total = 0.0_f64;
        for (from, edges) in &adjacency {
            for (to, &weight) in edges {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(Error::InvalidEdgeWeight {
                        from: from.clone(),
                        to: to.clone(),
                        weight,
                    });
                }
                total += weight;
            }
        }
        if !total.is_finite() {
            return Err(Error::WeightOverflow);
        }

        Ok(Self::from_parts(adjacency))
    }

    /// Wrap an adjacency mapping that is already known to be valid.
    pub(crate) fn from_parts(adjacency: Adjacency) -> Self {
        Self {
            adjacency: Arc::new(adjacency),
        }
    }

    /// Start building a graph edge by edge.
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// Borrow the underlying adjacency mapping.
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Whether `location` is a key of the graph.
    pub fn contains(&self, location: &str) -> bool {
        self.adjacency.contains_key(location)
    }

    /// Location keys in declaration order.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Owned copy of the location keys, in declaration order.
    pub fn location_names(&self) -> Vec<Location> {
        self.adjacency.keys().cloned().collect()
    }

    /// Neighbours of `location` with their edge weights. Unknown locations have none.
    pub fn neighbours<'a>(&'a self, location: &str) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        iter_edges(self.adjacency.get(location))
    }

    /// Weight of the declared edge `from -> to`, if any.
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<f64> {
        self.adjacency
            .get(from)
            .and_then(|edges| edges.get(to))
            .copied()
    }

    /// Number of location keys.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Derive the query-scoped graph with every `excluded` node removed.
    ///
    /// Excluded nodes disappear as keys and every edge targeting one is
    /// stripped from the remaining adjacency lists. The base graph is left
    /// untouched.
    pub fn working_graph(&self, excluded: &HashSet<Location>) -> WorkingGraph {
        let adjacency: Adjacency = self
            .adjacency
            .iter()
            .filter(|(location, _)| !excluded.contains(*location))
            .map(|(location, edges)| {
                let kept = edges
                    .iter()
                    .filter(|(target, _)| !excluded.contains(*target))
                    .map(|(target, weight)| (target.clone(), *weight))
                    .collect();
                (location.clone(), kept)
            })
            .collect();

        tracing::debug!(
            excluded = excluded.len(),
            remaining = adjacency.len(),
            "built working graph"
        );

        WorkingGraph { adjacency }
    }
}

/// Per-query copy of a [`CampusGraph`] with exclusions applied.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingGraph {
    adjacency: Adjacency,
}

impl WorkingGraph {
    pub fn contains(&self, location: &str) -> bool {
        self.adjacency.contains_key(location)
    }

    /// Neighbours of `location`. Edge targets that are not keys have none.
    pub fn neighbours<'a>(&'a self, location: &str) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        iter_edges(self.adjacency.get(location))
    }

    pub fn edge_weight(&self, from: &str, to: &str) -> Option<f64> {
        self.adjacency
            .get(from)
            .and_then(|edges| edges.get(to))
            .copied()
    }

    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

fn iter_edges<'a>(
    edges: Option<&'a Edges>,
) -> impl Iterator<Item = (&'a str, f64)> + 'a {
    edges
        .into_iter()
        .flat_map(|edges| edges.iter().map(|(target, weight)| (target.as_str(), *weight)))
}

/// Incremental constructor for [`CampusGraph`].
#[derive(Debug, Default, Clone)]
pub struct GraphBuilder {
    adjacency: Adjacency,
}

impl GraphBuilder {
    /// Declare a location with no outgoing edges (yet).
    pub fn location(mut self, name: impl Into<Location>) -> Self {
        self.adjacency.entry(name.into()).or_default();
        self
    }

    /// Declare a one-way edge. Only `from` becomes a key.
    pub fn edge(mut self, from: impl Into<Location>, to: impl Into<Location>, weight: f64) -> Self {
        self.adjacency
            .entry(from.into())
            .or_default()
            .insert(to.into(), weight);
        self
    }

    /// Declare a walkable path in both directions with the same weight.
    pub fn path(self, a: impl Into<Location>, b: impl Into<Location>, weight: f64) -> Self {
        let a = a.into();
        let b = b.into();
        self.edge(a.clone(), b.clone(), weight).edge(b, a, weight)
    }

    pub fn build(self) -> Result<CampusGraph> {
        CampusGraph::from_adjacency(self.adjacency)
    }
}
