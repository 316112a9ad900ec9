//! Route command handler for computing paths between named locations.

use anyhow::Result;

use campusnav_cli::output::OutputFormat;
use campusnav_lib::{plan_route, CampusGraph, Error as RouteError, RouteRequest, RouteSummary};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting location name.
    pub from: String,
    /// Destination location name.
    pub to: String,
    /// Locations to avoid.
    pub avoid: Vec<String>,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(self.from.clone(), self.to.clone()).with_blocked(self.avoid.clone())
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    graph: &CampusGraph,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    render_plan(graph, format, &args.to_request())
}

/// Plan `request` and render the result; shared with the ask command.
pub fn render_plan(graph: &CampusGraph, format: OutputFormat, request: &RouteRequest) -> Result<()> {
    let plan = match plan_route(graph, request) {
        Ok(plan) => plan,
        Err(err) => return Err(handle_route_failure(err)),
    };

    tracing::debug!(hops = plan.hop_count(), "route planned");
    let summary = RouteSummary::from_plan(graph, &plan);
    format.render_route(&summary)
}

fn handle_route_failure(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::RouteNotFound {
            start,
            end,
            blocked,
        } => anyhow::anyhow!(format_route_not_found_message(&start, &end, &blocked)),
        other => anyhow::Error::new(other),
    }
}

fn format_route_not_found_message(start: &str, end: &str, blocked: &[String]) -> String {
    let mut message = format!("No path found between {} and {}.", start, end);
    if !blocked.is_empty() {
        message.push_str(&format!(
            " Try avoiding fewer locations (currently avoiding: {}).",
            blocked.join(", ")
        ));
    }
    message
}
