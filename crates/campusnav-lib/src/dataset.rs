//! Graph configuration: the built-in campus map and JSON graph files.
//!
//! A graph file is a JSON object of objects mapping each location to its
//! neighbours and edge weights:
//!
//! ```json
//! { "A": { "B": 1, "C": 4 }, "B": { "A": 1, "C": 2 }, "C": { "A": 4, "B": 2 } }
//! ```

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::{Adjacency, CampusGraph};

/// Environment variable naming a graph file to load instead of the built-in map.
pub const GRAPH_PATH_ENV: &str = "CAMPUSNAV_GRAPH";

/// Campus walkways with assumed distances. Each direction is declared explicitly.
const CAMPUS_EDGES: &[(&str, &[(&str, f64)])] = &[
    ("Gate 1", &[("Main Road", 2.0), ("SBOP", 5.0)]),
    (
        "Main Road",
        &[("TAN Block", 4.0), ("Gate 1", 2.0), ("Library", 6.0)],
    ),
    (
        "TAN Block",
        &[("CS Block", 3.0), ("Main Road", 4.0), ("Hostel A", 5.0)],
    ),
    (
        "CS Block",
        &[("SBOP", 6.0), ("TAN Block", 3.0), ("Library", 4.0)],
    ),
    (
        "SBOP",
        &[("Gate 1", 5.0), ("CS Block", 6.0), ("Admin Block", 3.0)],
    ),
    (
        "Library",
        &[("Main Road", 6.0), ("CS Block", 4.0), ("Hostel B", 5.0)],
    ),
    ("Hostel A", &[("TAN Block", 5.0), ("Hostel B", 3.0)]),
    (
        "Hostel B",
        &[("Library", 5.0), ("Hostel A", 3.0), ("Hostel C", 4.0)],
    ),
    ("Hostel C", &[("Hostel B", 4.0), ("Canteen", 6.0)]),
    ("Canteen", &[("Hostel C", 6.0), ("Admin Block", 2.0)]),
    (
        "Admin Block",
        &[("SBOP", 3.0), ("Canteen", 2.0), ("Auditorium", 4.0)],
    ),
    ("Auditorium", &[("Admin Block", 4.0), ("Sports Complex", 5.0)]),
    ("Sports Complex", &[("Auditorium", 5.0), ("Gate 2", 7.0)]),
    ("Gate 2", &[("Sports Complex", 7.0)]),
];

/// The built-in campus map.
pub fn campus_graph() -> CampusGraph {
    let adjacency: Adjacency = CAMPUS_EDGES
        .iter()
        .map(|(location, edges)| {
            let edges = edges
                .iter()
                .map(|(target, weight)| (target.to_string(), *weight))
                .collect();
            (location.to_string(), edges)
        })
        .collect();
    CampusGraph::from_parts(adjacency)
}

/// Where the base graph comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GraphSource {
    /// The campus map compiled into the library.
    #[default]
    BuiltIn,
    /// A JSON graph file on disk.
    File(PathBuf),
}

impl fmt::Display for GraphSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphSource::BuiltIn => f.write_str("built-in campus map"),
            GraphSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Pick the graph source: explicit override, then `CAMPUSNAV_GRAPH`, then built-in.
pub fn resolve_graph_source(override_path: Option<&Path>) -> GraphSource {
    if let Some(path) = override_path {
        return GraphSource::File(path.to_path_buf());
    }

    match env::var_os(GRAPH_PATH_ENV) {
        Some(value) if !value.is_empty() => {
            debug!("using graph from {}", GRAPH_PATH_ENV);
            GraphSource::File(PathBuf::from(value))
        }
        _ => GraphSource::BuiltIn,
    }
}

/// Load the graph described by `source`.
pub fn load_graph_source(source: &GraphSource) -> Result<CampusGraph> {
    match source {
        GraphSource::BuiltIn => Ok(campus_graph()),
        GraphSource::File(path) => load_graph(path),
    }
}

/// Read and validate a JSON graph file.
pub fn load_graph(path: &Path) -> Result<CampusGraph> {
    let contents = fs::read_to_string(path)?;
    let graph = parse_graph(&contents).map_err(|err| match err {
        Error::Json(source) => Error::GraphParse {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    info!(
        locations = graph.len(),
        "loaded graph from {}",
        path.display()
    );
    Ok(graph)
}

/// Parse and validate a graph from JSON text.
pub fn parse_graph(contents: &str) -> Result<CampusGraph> {
    let adjacency: Adjacency = serde_json::from_str(contents)?;
    CampusGraph::from_adjacency(adjacency)
}
