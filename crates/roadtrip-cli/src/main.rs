use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roadtrip_cli::output::{join_reports, render_itinerary, write_report, OutputFormat};
use roadtrip_cli::requests::{read_requests, AlgorithmArg};
use roadtrip_lib::{
    load_map_with, plan_trip, DuplicateRoadPolicy, LoadOptions, RoadNetwork, TripOptions,
    TripRequest,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Plan driving directions between locations on a road map")]
struct Cli {
    /// Map file listing locations and roads.
    #[arg(long, env = "ROADTRIP_MAP", default_value = "Map")]
    map: PathBuf,

    /// Search algorithm used for every leg.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::AStar)]
    algorithm: AlgorithmArg,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Name the destination at the end of every leg, not only the last.
    #[arg(long)]
    waypoints: bool,

    /// Let a later road between the same two locations replace an earlier one.
    #[arg(long)]
    allow_road_overwrite: bool,

    /// Write the report to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Locations to visit in order. When omitted, trips are read from stdin,
    /// one comma-separated list per line.
    destinations: Vec<String>,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Plan every requested trip. Returns `Ok(false)` when at least one trip
/// failed; its diagnostic has already been printed.
fn run(cli: &Cli) -> Result<bool> {
    let load_options = LoadOptions {
        duplicate_roads: if cli.allow_road_overwrite {
            DuplicateRoadPolicy::Overwrite
        } else {
            DuplicateRoadPolicy::Reject
        },
    };
    let network = load_map_with(&cli.map, load_options)
        .with_context(|| format!("failed to load map from {}", cli.map.display()))?;

    let options = TripOptions {
        algorithm: cli.algorithm.into(),
        name_waypoints: cli.waypoints,
    };
    let requests = if cli.destinations.is_empty() {
        read_requests(io::stdin().lock(), options)
            .context("failed to read trip requests from stdin")?
    } else {
        vec![TripRequest::new(cli.destinations.iter().cloned()).with_options(options)]
    };
    debug!(count = requests.len(), "planning trips");

    let mut reports = Vec::with_capacity(requests.len());
    let mut all_planned = true;
    for request in &requests {
        match plan(&network, request, cli.format) {
            Ok(report) => reports.push(report),
            Err(err) => {
                all_planned = false;
                eprintln!("error: {err:#}");
            }
        }
    }

    if !reports.is_empty() {
        let report = join_reports(&reports);
        write_report(cli.output.as_deref(), &report).with_context(|| match &cli.output {
            Some(path) => format!("failed to write report to {}", path.display()),
            None => "failed to write report to stdout".to_string(),
        })?;
    }
    Ok(all_planned)
}

fn plan(
    network: &RoadNetwork,
    request: &TripRequest,
    format: OutputFormat,
) -> Result<String> {
    let itinerary = plan_trip(network, request)
        .with_context(|| format!("cannot plan trip {}", request.destinations.join(", ")))?;
    render_itinerary(&itinerary, format).context("failed to serialize itinerary")
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
