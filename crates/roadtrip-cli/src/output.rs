//! Output formatting for trip reports.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use clap::ValueEnum;
use roadtrip_lib::Itinerary;

/// Report format selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Numbered driving directions.
    #[default]
    Text,
    /// The full itinerary as pretty-printed JSON.
    Json,
}

/// Render one itinerary in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_itinerary(itinerary: &Itinerary, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(itinerary.render()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(itinerary)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Join rendered reports with a blank line between consecutive reports.
pub fn join_reports(reports: &[String]) -> String {
    reports.join("\n")
}

/// Write the finished report to `path`, or to stdout when `path` is `None`.
pub fn write_report(path: Option<&Path>, report: &str) -> io::Result<()> {
    match path {
        Some(path) => fs::write(path, report),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(report.as_bytes())?;
            stdout.flush()
        }
    }
}
