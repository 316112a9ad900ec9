//! Map raw location names onto graph keys.
//!
//! Resolution is an exact match after trimming and lower-casing. Similarity
//! scoring is only used to suggest alternatives in error messages.

use crate::graph::{CampusGraph, Location};

/// Minimum Jaro-Winkler similarity for a location to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Resolve `name` to the first location whose lower-cased key equals it.
///
/// Keys are visited in declaration order. Blank input never resolves.
pub fn find_location(graph: &CampusGraph, name: &str) -> Option<Location> {
    let wanted = name.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }

    graph
        .locations()
        .find(|location| location.to_lowercase() == wanted)
        .map(str::to_string)
}

/// Resolve each name, dropping the ones that do not match a location.
pub fn find_locations<S: AsRef<str>>(graph: &CampusGraph, names: &[S]) -> Vec<Location> {
    names
        .iter()
        .filter_map(|name| {
            let resolved = find_location(graph, name.as_ref());
            if resolved.is_none() {
                tracing::debug!(name = name.as_ref(), "dropping unresolved location");
            }
            resolved
        })
        .collect()
}

/// Up to `limit` locations that look similar to `name`, best first.
pub fn suggest_locations(graph: &CampusGraph, name: &str, limit: usize) -> Vec<Location> {
    let wanted = name.trim().to_lowercase();
    if wanted.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &str)> = graph
        .locations()
        .map(|location| {
            (
                strsim::jaro_winkler(&wanted, &location.to_lowercase()),
                location,
            )
        })
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, location)| location.to_string())
        .collect()
}
