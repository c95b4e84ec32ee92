//! Turning a path through the network into numbered driving directions.
//!
//! Consecutive roads that share a name and heading collapse into one
//! instruction. Mileage is summed at full precision and only rounded when a
//! step is displayed or serialised.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::network::{LocationId, RoadNetwork};

/// Round a mileage to one decimal place, halves rounding up.
pub fn round_miles(miles: f64) -> f64 {
    (miles * 10.0).round() / 10.0
}

/// One numbered instruction covering a run of same-road, same-heading
/// segments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub number: usize,
    pub road: String,
    pub direction: Direction,
    #[serde(serialize_with = "serialize_rounded")]
    pub miles: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. Take {} {} for {:.1} miles",
            self.number,
            self.road,
            self.direction.full_name(),
            round_miles(self.miles)
        )?;
        if let Some(destination) = &self.destination {
            write!(f, " to {destination}")?;
        }
        f.write_str(".")
    }
}

pub(crate) fn serialize_rounded<S: Serializer>(
    miles: &f64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_miles(*miles))
}

/// Describe `path` as merged steps numbered from `first_number`.
///
/// Returns the steps together with the number the next step should use. A
/// single-location path produces no steps. The caller decides which step,
/// if any, names a destination.
pub fn describe_path(
    network: &RoadNetwork,
    path: &[LocationId],
    first_number: usize,
) -> Result<(Vec<Step>, usize)> {
    if path.is_empty() {
        return Err(Error::EmptyPath);
    }

    let mut steps: Vec<Step> = Vec::new();
    let mut number = first_number;

    for pair in path.windows(2) {
        let road = network.road_between(pair[0], pair[1])?;
        match steps.last_mut() {
            Some(current) if current.road == road.name && current.direction == road.direction => {
                current.miles += road.length;
            }
            _ => {
                steps.push(Step {
                    number,
                    road: road.name.clone(),
                    direction: road.direction,
                    miles: road.length,
                    destination: None,
                });
                number += 1;
            }
        }
    }

    Ok((steps, number))
}
