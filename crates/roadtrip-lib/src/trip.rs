//! Multi-leg trip planning.
//!
//! A trip visits an ordered list of destinations. Each consecutive pair is a
//! leg, searched independently, while step numbering runs across the whole
//! trip. The complete [`Itinerary`] is built before anything is rendered, so
//! a failing leg never produces partial output.

use std::fmt::Write;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::itinerary::{describe_path, serialize_rounded, Step};
use crate::network::{LocationId, RoadNetwork};
use crate::path::{find_route, SearchAlgorithm};

/// Options applied while planning a trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TripOptions {
    pub algorithm: SearchAlgorithm,
    /// Name the destination on the last step of every leg rather than only
    /// on the last step of the trip.
    pub name_waypoints: bool,
}

/// High-level trip planning request.
#[derive(Debug, Clone)]
pub struct TripRequest {
    pub destinations: Vec<String>,
    pub options: TripOptions,
}

impl TripRequest {
    /// Convenience constructor using default options.
    pub fn new<I, S>(destinations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            destinations: destinations.into_iter().map(Into::into).collect(),
            options: TripOptions::default(),
        }
    }

    pub fn with_options(mut self, options: TripOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse a comma-separated request such as `"Berkeley, Oakland, Davis"`.
    /// Blank entries are dropped.
    pub fn parse_list(line: &str) -> Self {
        Self::new(
            line.split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty()),
        )
    }
}

/// Summary of one leg of a trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub from: String,
    pub to: String,
    /// Every location visited on the leg, endpoints included.
    pub path: Vec<String>,
    #[serde(serialize_with = "serialize_rounded")]
    pub miles: f64,
}

/// A fully planned trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    pub algorithm: SearchAlgorithm,
    pub origin: String,
    pub destination: String,
    pub legs: Vec<Leg>,
    pub steps: Vec<Step>,
    #[serde(serialize_with = "serialize_rounded")]
    pub total_miles: f64,
}

impl Itinerary {
    /// Plain-text report: a header naming the origin, a blank line, then one
    /// line per step.
    pub fn render(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "From {}:", self.origin);
        let _ = writeln!(buffer);
        for step in &self.steps {
            let _ = writeln!(buffer, "{step}");
        }
        buffer
    }
}

/// Plan a trip through `request.destinations` in order.
pub fn plan_trip(network: &RoadNetwork, request: &TripRequest) -> Result<Itinerary> {
    let destinations = &request.destinations;
    if destinations.len() < 2 {
        return Err(Error::InsufficientDestinations {
            count: destinations.len(),
        });
    }

    let stops = destinations
        .iter()
        .map(|name| network.location_id(name))
        .collect::<Result<Vec<LocationId>>>()?;

    let mut legs = Vec::with_capacity(stops.len() - 1);
    let mut steps: Vec<Step> = Vec::new();
    let mut next_number = 1;

    for (index, pair) in stops.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        let route = find_route(network, from, to, request.options.algorithm)?;
        debug!(
            leg = index + 1,
            from = %destinations[index],
            to = %destinations[index + 1],
            hops = route.hop_count(),
            miles = route.length,
            "planned leg"
        );

        let (mut leg_steps, next) = describe_path(network, &route.vertices, next_number)?;
        next_number = next;
        if request.options.name_waypoints {
            if let Some(last) = leg_steps.last_mut() {
                last.destination = Some(destinations[index + 1].clone());
            }
        }
        steps.append(&mut leg_steps);

        legs.push(Leg {
            from: destinations[index].clone(),
            to: destinations[index + 1].clone(),
            path: route
                .vertices
                .iter()
                .map(|&id| network.display_name(id).to_string())
                .collect(),
            miles: route.length,
        });
    }

    let destination = destinations[destinations.len() - 1].clone();
    if let Some(last) = steps.last_mut() {
        last.destination = Some(destination.clone());
    }

    Ok(Itinerary {
        algorithm: request.options.algorithm,
        origin: destinations[0].clone(),
        destination,
        total_miles: legs.iter().map(|leg| leg.miles).sum(),
        legs,
        steps,
    })
}
