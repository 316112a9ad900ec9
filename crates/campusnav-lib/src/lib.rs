//! Campus navigation library entry points.
//!
//! This crate exposes helpers to load the campus graph, resolve location
//! names, extract routing fields from free text, and run the shortest-path
//! engine with per-query exclusions. Higher-level consumers (the CLI) should
//! only depend on the functions exported here instead of reimplementing
//! behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod extract;
pub mod graph;
pub mod output;
pub mod path;
pub mod resolve;
pub mod routing;

pub use dataset::{
    campus_graph, load_graph, load_graph_source, parse_graph, resolve_graph_source, GraphSource,
};
pub use error::{EndpointRole, Error, Result};
pub use extract::{
    Extraction, ExtractorConfig, GeminiExtractor, LocationExtractor, StaticExtractor,
};
pub use graph::{Adjacency, CampusGraph, Edges, GraphBuilder, Location, WorkingGraph};
pub use output::{RouteStep, RouteSummary};
pub use path::{shortest_path, ShortestPath, UNREACHABLE};
pub use resolve::{find_location, find_locations, suggest_locations};
pub use routing::{plan_route, RoutePlan, RouteRequest};
