//! Output formatting for route rendering.
//!
//! Routes and location listings render either as human-readable text or as
//! JSON for scripting.

use std::io::{self, Write};

use anyhow::Result;
use campusnav_lib::output::format_distance;
use campusnav_lib::RouteSummary;
use clap::ValueEnum;

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Render a route summary to stdout.
    pub fn render_route(self, summary: &RouteSummary) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        match self {
            OutputFormat::Text => {
                write_route_text(&mut handle, summary, &ColorPalette::detect())?
            }
            OutputFormat::Json => write_json(&mut handle, summary)?,
        }
        Ok(())
    }

    /// Render the list of known locations to stdout.
    pub fn render_locations(self, locations: &[String]) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        match self {
            OutputFormat::Text => {
                for location in locations {
                    writeln!(handle, "{location}")?;
                }
            }
            OutputFormat::Json => write_json(&mut handle, locations)?,
        }
        Ok(())
    }
}

/// Write a route in text form: distance line, arrow-separated path, avoided list.
pub fn write_route_text<W: Write>(
    out: &mut W,
    summary: &RouteSummary,
    palette: &ColorPalette,
) -> io::Result<()> {
    writeln!(
        out,
        "Shortest distance: {}{}{}",
        palette.distance,
        format_distance(summary.distance),
        palette.reset
    )?;

    let arrow = format!("{} → {}", palette.secondary, palette.reset);
    let path = summary
        .steps
        .iter()
        .map(|step| format!("{}{}{}", palette.emphasis, step.location, palette.reset))
        .collect::<Vec<_>>()
        .join(&arrow);
    writeln!(out, "Path: {path}")?;

    if !summary.blocked.is_empty() {
        writeln!(
            out,
            "Avoiding: {}{}{}",
            palette.warning,
            summary.blocked.join(", "),
            palette.reset
        )?;
    }
    Ok(())
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
