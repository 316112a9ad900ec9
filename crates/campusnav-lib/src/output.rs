use std::fmt::Write;

use serde::Serialize;

use crate::graph::{CampusGraph, Location};
use crate::routing::RoutePlan;

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub location: Location,
    /// Weight of the edge walked to reach this step; `None` for the start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg_distance: Option<f64>,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub start: Location,
    pub end: Location,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blocked: Vec<Location>,
    pub distance: f64,
    pub hops: usize,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with per-leg distances.
    pub fn from_plan(graph: &CampusGraph, plan: &RoutePlan) -> Self {
        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, location)| RouteStep {
                index,
                location: location.clone(),
                leg_distance: index
                    .checked_sub(1)
                    .and_then(|prev| graph.edge_weight(&plan.steps[prev], location)),
            })
            .collect();

        Self {
            start: plan.start.clone(),
            end: plan.end.clone(),
            blocked: plan.blocked.clone(),
            distance: plan.distance,
            hops: plan.hop_count(),
            steps,
        }
    }

    /// Render the summary as plain text.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Shortest distance: {}",
            format_distance(self.distance)
        );
        let _ = writeln!(
            buffer,
            "Path: {}",
            self.steps
                .iter()
                .map(|step| step.location.as_str())
                .collect::<Vec<_>>()
                .join(" → ")
        );
        if !self.blocked.is_empty() {
            let _ = writeln!(buffer, "Avoiding: {}", self.blocked.join(", "));
        }
        buffer
    }
}

/// Format a distance without a trailing `.0` when it is a whole number.
pub fn format_distance(distance: f64) -> String {
    if distance.is_finite() && distance.fract() == 0.0 {
        format!("{}", distance as i64)
    } else {
        format!("{}", distance)
    }
}
