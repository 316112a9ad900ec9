//! Ask command handler: free-text query -> extracted fields -> route.

use anyhow::{bail, Context, Result};

use campusnav_cli::output::OutputFormat;
use campusnav_lib::extract::parse_model_text;
use campusnav_lib::{
    CampusGraph, GeminiExtractor, LocationExtractor, RouteRequest, StaticExtractor,
};

use super::route::render_plan;

/// Arguments for the ask command.
#[derive(Debug, Clone)]
pub struct AskCommandArgs {
    /// Natural-language routing request.
    pub query: String,
    /// Pre-computed model reply to use instead of calling the language model.
    pub extraction_json: Option<String>,
}

/// Pick the extractor: a fixed reply when one is supplied, otherwise the live model.
fn select_extractor(args: &AskCommandArgs) -> Result<Box<dyn LocationExtractor>> {
    match args.extraction_json.as_deref() {
        Some(reply) => Ok(Box::new(StaticExtractor::new(parse_model_text(reply)))),
        None => {
            let extractor =
                GeminiExtractor::from_env().context("failed to configure language model client")?;
            Ok(Box::new(extractor))
        }
    }
}

/// Handle the ask subcommand.
pub fn handle_ask_command(
    graph: &CampusGraph,
    format: OutputFormat,
    args: &AskCommandArgs,
) -> Result<()> {
    let query = args.query.trim();
    if query.is_empty() {
        bail!("please enter a query");
    }

    let extractor = select_extractor(args)?;
    let extraction = extractor
        .extract(query)
        .context("language model extraction failed")?;
    tracing::debug!(
        start = ?extraction.start,
        end = ?extraction.end,
        blocked = ?extraction.blocked_nodes,
        "extracted routing fields"
    );

    render_plan(graph, format, &RouteRequest::from(extraction))
}
