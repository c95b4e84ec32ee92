//! Road trip library entry points.
//!
//! This crate loads a road map into memory, finds shortest paths between its
//! locations, and turns multi-stop trips into numbered driving directions.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod direction;
pub mod error;
pub mod graph;
pub mod itinerary;
pub mod mapfile;
pub mod network;
pub mod path;
pub mod trip;

pub use direction::{Direction, ParseDirectionError};
pub use error::{Error, Result};
pub use graph::{LabeledGraph, VertexId};
pub use itinerary::{describe_path, round_miles, Step};
pub use mapfile::{load_map, load_map_with, parse_map, parse_map_with, read_map, LoadOptions};
pub use network::{DuplicateRoadPolicy, Location, LocationId, Road, RoadNetwork, Shortcut};
pub use path::{a_star, find_route, SearchAlgorithm, ShortestPath};
pub use trip::{plan_trip, Itinerary, Leg, TripOptions, TripRequest};
