use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use campusnav_cli::output::OutputFormat;
use campusnav_lib::{load_graph_source, resolve_graph_source};

mod commands;

use commands::ask::{handle_ask_command, AskCommandArgs};
use commands::locations::handle_locations_command;
use commands::route::{handle_route_command, RouteCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Campus route planner")]
struct Cli {
    /// JSON graph file to use instead of the built-in campus map.
    #[arg(long, global = true, value_name = "PATH")]
    graph: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two location names.
    Route {
        /// Starting location name.
        #[arg(long = "from")]
        from: String,
        /// Destination location name.
        #[arg(long = "to")]
        to: String,
        /// Location to avoid (repeatable).
        #[arg(long = "avoid", value_name = "LOCATION")]
        avoid: Vec<String>,
    },
    /// Ask for a route in plain language, e.g. "Gate 1 to Library avoiding Hostel B".
    Ask {
        /// Natural-language routing request.
        query: String,
        /// Use this model reply instead of calling the language model.
        #[arg(long, value_name = "JSON")]
        extraction_json: Option<String>,
    },
    /// List every known location.
    Locations,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let source = resolve_graph_source(cli.graph.as_deref());
    let graph =
        load_graph_source(&source).with_context(|| format!("failed to load graph from {source}"))?;

    match cli.command {
        Command::Route { from, to, avoid } => {
            handle_route_command(&graph, cli.format, &RouteCommandArgs { from, to, avoid })
        }
        Command::Ask {
            query,
            extraction_json,
        } => handle_ask_command(
            &graph,
            cli.format,
            &AskCommandArgs {
                query,
                extraction_json,
            },
        ),
        Command::Locations => handle_locations_command(&graph, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
