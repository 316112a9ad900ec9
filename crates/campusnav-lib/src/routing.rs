//! Route planning on top of the shortest-path engine.
//!
//! This is the calling layer around [`shortest_path`]:
//! - resolves raw start/end/blocked names to graph locations
//! - rejects unresolved endpoints and identical endpoints
//! - turns the engine's unreachable result into [`Error::RouteNotFound`]
//!
//! # Example
//!
//! ```
//! use campusnav_lib::{campus_graph, plan_route, RouteRequest};
//!
//! let graph = campus_graph();
//! let request = RouteRequest::new("gate 1", "library").with_blocked(["Main Road"]);
//! let plan = plan_route(&graph, &request)?;
//! assert_eq!(plan.steps.first().map(String::as_str), Some("Gate 1"));
//! # Ok::<(), campusnav_lib::Error>(())
//! ```

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{EndpointRole, Error, Result};
use crate::extract::Extraction;
use crate::graph::{CampusGraph, Location};
use crate::path::shortest_path;
use crate::resolve::{find_location, find_locations, suggest_locations};

const MAX_SUGGESTIONS: usize = 3;

/// Raw routing request as produced by the extraction layer or the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: Option<String>,
    pub end: Option<String>,
    pub blocked: Vec<String>,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
            blocked: Vec::new(),
        }
    }

    /// Add locations to avoid for this request.
    pub fn with_blocked<I, S>(mut self, blocked: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocked.extend(blocked.into_iter().map(Into::into));
        self
    }
}

impl From<Extraction> for RouteRequest {
    fn from(extraction: Extraction) -> Self {
        Self {
            start: extraction.start,
            end: extraction.end,
            blocked: extraction.blocked_nodes,
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub start: Location,
    pub end: Location,
    /// Resolved locations that were excluded from the search.
    pub blocked: Vec<Location>,
    pub distance: f64,
    pub steps: Vec<Location>,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Resolve an endpoint name, reporting suggestions when it does not match.
fn resolve_endpoint(
    graph: &CampusGraph,
    role: EndpointRole,
    name: Option<&str>,
) -> Result<Location> {
    name.and_then(|name| find_location(graph, name))
        .ok_or_else(|| Error::UnresolvedEndpoint {
            role,
            name: name.map(str::to_string),
            suggestions: name
                .map(|name| suggest_locations(graph, name, MAX_SUGGESTIONS))
                .unwrap_or_default(),
            valid: graph.location_names(),
        })
}

/// Compute a route for the request.
///
/// 1. Resolve start and end; either failing is an error
/// 2. Reject identical endpoints
/// 3. Resolve blocked names, dropping the ones that do not match
/// 4. Run the engine and report unreachable as [`Error::RouteNotFound`]
pub fn plan_route(graph: &CampusGraph, request: &RouteRequest) -> Result<RoutePlan> {
    let start = resolve_endpoint(graph, EndpointRole::Start, request.start.as_deref())?;
    let end = resolve_endpoint(graph, EndpointRole::End, request.end.as_deref())?;

    if start == end {
        return Err(Error::SameEndpoints { location: start });
    }

    let blocked = find_locations(graph, &request.blocked);
    let excluded: HashSet<Location> = blocked.iter().cloned().collect();
    tracing::debug!(%start, %end, ?blocked, "planning route");

    let result = shortest_path(graph, &start, &end, &excluded);
    if !result.is_reachable() {
        return Err(Error::RouteNotFound {
            start,
            end,
            blocked,
        });
    }

    Ok(RoutePlan {
        start,
        end,
        blocked,
        distance: result.distance,
        steps: result.path,
    })
}
