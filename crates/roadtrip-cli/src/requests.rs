//! Trip requests as given on the command line or standard input.

use std::io::{self, BufRead};

use clap::ValueEnum;
use roadtrip_lib::{SearchAlgorithm, TripOptions, TripRequest};

/// Supported search algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum AlgorithmArg {
    /// A* search guided by straight-line distance (default).
    #[default]
    AStar,
    /// Dijkstra's algorithm; exact even on maps with shortcut roads.
    Dijkstra,
}

impl From<AlgorithmArg> for SearchAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::AStar => SearchAlgorithm::AStar,
            AlgorithmArg::Dijkstra => SearchAlgorithm::Dijkstra,
        }
    }
}

/// Read one trip per line, destinations separated by commas.
///
/// Blank lines are skipped. Every request carries `options`.
pub fn read_requests<R: BufRead>(reader: R, options: TripOptions) -> io::Result<Vec<TripRequest>> {
    let mut requests = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        requests.push(TripRequest::parse_list(&line).with_options(options));
    }
    Ok(requests)
}
