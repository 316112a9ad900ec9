//! Locations command handler for listing valid location names.

use anyhow::Result;

use campusnav_cli::output::OutputFormat;
use campusnav_lib::CampusGraph;

/// Print every location key in declaration order.
pub fn handle_locations_command(graph: &CampusGraph, format: OutputFormat) -> Result<()> {
    format.render_locations(&graph.location_names())
}
