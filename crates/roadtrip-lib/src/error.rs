use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the road trip library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A map record had an unknown tag, a bad field, or ended early.
    /// `entry` is the 1-based ordinal of the record.
    #[error("map entry #{entry}: {reason}")]
    MalformedMapEntry { entry: usize, reason: String },

    /// The map file could not be opened or read.
    #[error("cannot read map file {path}")]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A location name was defined more than once.
    #[error("multiple entries for {name}")]
    DuplicateLocation { name: String },

    /// A road or trip request referenced a name missing from the map.
    #[error("no location named {name}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        name: String,
        suggestions: Vec<String>,
    },

    /// A road was loaded twice between the same pair of locations.
    #[error("duplicate road between {from} and {to}")]
    DuplicateRoad { from: String, to: String },

    /// Road lengths must be finite and strictly positive.
    #[error("road from {from} to {to} has invalid length {length}")]
    InvalidRoadLength {
        from: String,
        to: String,
        length: f64,
    },

    /// A road must join two different locations.
    #[error("road {road} starts and ends at {location}")]
    LoopRoad { location: String, road: String },

    /// Raised when an itinerary walks a pair of locations with no road.
    #[error("no road leads directly from {from} to {to}")]
    NoDirectRoad { from: String, to: String },

    /// Raised when an itinerary is requested for a path with no locations.
    #[error("path was empty")]
    EmptyPath,

    /// The network has no path between the two locations.
    #[error("no path found from {start} to {goal}")]
    NoPathFound { start: String, goal: String },

    /// A trip needs an origin and at least one destination.
    #[error("must have at least two locations for a trip (got {count})")]
    InsufficientDestinations { count: usize },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
