use std::path::PathBuf;

use thiserror::Error;

use crate::graph::Location;

/// Convenient result alias for the campus navigation library.
pub type Result<T> = std::result::Result<T, Error>;

/// Which end of a route a location name was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointRole {
    Start,
    End,
}

impl std::fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndpointRole::Start => f.write_str("start"),
            EndpointRole::End => f.write_str("end"),
        }
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a start or end name does not match any location.
    #[error(
        "could not understand {role} location{}{}; valid locations: {}",
        format_name(.name),
        format_suggestions(.suggestions),
        format_valid(.valid)
    )]
    UnresolvedEndpoint {
        role: EndpointRole,
        name: Option<String>,
        suggestions: Vec<String>,
        valid: Vec<Location>,
    },

    /// Raised when the resolved start and end are the same location.
    #[error("start and end locations cannot be the same ({location})")]
    SameEndpoints { location: Location },

    /// Raised when no route connects the endpoints once exclusions apply.
    ///
    /// `blocked` holds the resolved locations that were excluded.
    #[error("no route found between {start} and {end}")]
    RouteNotFound {
        start: Location,
        end: Location,
        blocked: Vec<Location>,
    },

    /// Raised when a graph definition contains no locations.
    #[error("graph does not contain any locations")]
    EmptyGraph,

    /// Raised when an edge weight is negative or not a finite number.
    #[error("invalid weight {weight} on edge {from} -> {to}")]
    InvalidEdgeWeight {
        from: Location,
        to: Location,
        weight: f64,
    },

    /// Raised when the edge weights add up to more than `f64` can represent.
    #[error("edge weights are too large: their total overflows")]
    WeightOverflow,

    /// Raised when a graph file could not be parsed.
    #[error("failed to parse graph file {path}: {source}")]
    GraphParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Raised when the language-model API key is not configured.
    #[error("language model API key not set; export {var}")]
    MissingApiKey { var: &'static str },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Wrapper for JSON errors outside of graph loading.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_name(name: &Option<String>) -> String {
    match name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => format!(" '{}'", name),
        _ => String::new(),
    }
}

fn format_valid(valid: &[Location]) -> String {
    valid.join(", ")
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(" (did you mean '{}'?)", suggestions[0])
    } else {
        format!(
            " (did you mean one of: {}?)",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
