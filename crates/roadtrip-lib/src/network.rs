use std::collections::HashMap;

use serde::Serialize;
use strsim::jaro_winkler;

use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::graph::{LabeledGraph, VertexId};

/// Identifier of a location within a [`RoadNetwork`].
pub type LocationId = VertexId;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;
const MAX_SUGGESTIONS: usize = 3;

/// A named point on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Straight-line distance to another location.
    pub fn distance_to(&self, other: &Location) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// One direction of travel along a named road.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Road {
    pub name: String,
    pub direction: Direction,
    pub length: f64,
}

impl Road {
    pub fn new(name: impl Into<String>, direction: Direction, length: f64) -> Self {
        Self {
            name: name.into(),
            direction,
            length,
        }
    }

    /// The same road travelled the other way.
    pub fn reversed(&self) -> Self {
        Self {
            name: self.name.clone(),
            direction: self.direction.reverse(),
            length: self.length,
        }
    }
}

/// What to do when a road is loaded between locations that already have one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateRoadPolicy {
    /// Fail with [`Error::DuplicateRoad`].
    #[default]
    Reject,
    /// Replace the earlier road in both directions.
    Overwrite,
}

/// A road whose length is shorter than the straight line between its ends.
#[derive(Debug, Clone, PartialEq)]
pub struct Shortcut {
    pub from: LocationId,
    pub to: LocationId,
    pub length: f64,
    pub straight_line: f64,
}

/// In-memory road map: locations, the roads between them, and a name index.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    graph: LabeledGraph<Location, Road>,
    name_to_id: HashMap<String, LocationId>,
    duplicate_roads: DuplicateRoadPolicy,
}

impl RoadNetwork {
    /// An empty network that rejects duplicate roads.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty network using the given duplicate-road policy.
    pub fn with_policy(duplicate_roads: DuplicateRoadPolicy) -> Self {
        Self {
            duplicate_roads,
            ..Self::default()
        }
    }

    pub fn location_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Number of directed roads, counting each direction separately.
    pub fn road_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Underlying labeled graph, for use with the generic search.
    pub fn graph(&self) -> &LabeledGraph<Location, Road> {
        &self.graph
    }

    /// Define a new location.
    pub fn add_location(&mut self, name: impl Into<String>, x: f64, y: f64) -> Result<LocationId> {
        let name = name.into();
        if self.name_to_id.contains_key(&name) {
            return Err(Error::DuplicateLocation { name });
        }
        let id = self.graph.add_vertex(Location::new(name.clone(), x, y));
        self.name_to_id.insert(name, id);
        Ok(id)
    }

    /// Add the road `road_name` running from `from` to `to` in `direction`,
    /// plus the matching road back.
    pub fn add_road(
        &mut self,
        from: &str,
        road_name: &str,
        length: f64,
        direction: Direction,
        to: &str,
    ) -> Result<()> {
        let start = self.require(from)?;
        let end = self.require(to)?;

        if !length.is_finite() || length <= 0.0 {
            return Err(Error::InvalidRoadLength {
                from: from.to_string(),
                to: to.to_string(),
                length,
            });
        }

        if start == end {
            return Err(Error::LoopRoad {
                location: from.to_string(),
                road: road_name.to_string(),
            });
        }

        if self.duplicate_roads == DuplicateRoadPolicy::Reject
            && (self.graph.contains_edge(start, end) || self.graph.contains_edge(end, start))
        {
            return Err(Error::DuplicateRoad {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        let forward = Road::new(road_name, direction, length);
        let back = forward.reversed();
        self.graph.add_edge(start, end, forward);
        self.graph.add_edge(end, start, back);
        Ok(())
    }

    /// Road on the directed edge `from -> to`.
    pub fn road_between(&self, from: LocationId, to: LocationId) -> Result<&Road> {
        self.graph
            .edge(from, to)
            .ok_or_else(|| Error::NoDirectRoad {
                from: self.display_name(from).to_string(),
                to: self.display_name(to).to_string(),
            })
    }

    /// Location stored under `id`.
    pub fn location_at(&self, id: LocationId) -> Option<&Location> {
        self.graph.vertex(id)
    }

    pub fn locations(&self) -> impl Iterator<Item = (LocationId, &Location)> + '_ {
        self.graph.vertices()
    }

    /// Lookup a location identifier by its case-sensitive name.
    pub fn location_id(&self, name: &str) -> Result<LocationId> {
        self.name_to_id
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownLocation {
                name: name.to_string(),
                suggestions: self.similar_names(name),
            })
    }

    /// Length of the road `from -> to`, or infinity when there is none.
    pub fn weight(&self, from: LocationId, to: LocationId) -> f64 {
        self.graph
            .edge(from, to)
            .map_or(f64::INFINITY, |road| road.length)
    }

    /// Straight-line distance between two locations; zero if either is
    /// unknown.
    pub fn straight_line_distance(&self, from: LocationId, to: LocationId) -> f64 {
        match (self.graph.vertex(from), self.graph.vertex(to)) {
            (Some(a), Some(b)) => a.distance_to(b),
            _ => 0.0,
        }
    }

    /// Roads shorter than the straight line between their endpoints.
    ///
    /// A* on this network is only guaranteed optimal when this is empty.
    pub fn shortcut_roads(&self) -> Vec<Shortcut> {
        let mut shortcuts = Vec::new();
        for (from, _) in self.graph.vertices() {
            for (to, road) in self.graph.successors(from) {
                let straight_line = self.straight_line_distance(from, to);
                if road.length < straight_line {
                    shortcuts.push(Shortcut {
                        from,
                        to,
                        length: road.length,
                        straight_line,
                    });
                }
            }
        }
        shortcuts
    }

    pub(crate) fn display_name(&self, id: LocationId) -> &str {
        self.graph
            .vertex(id)
            .map(|location| location.name.as_str())
            .unwrap_or("<unknown>")
    }

    fn require(&self, name: &str) -> Result<LocationId> {
        self.name_to_id
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownLocation {
                name: name.to_string(),
                suggestions: Vec::new(),
            })
    }

    fn similar_names(&self, name: &str) -> Vec<String> {
        let mut scored: Vec<(f64, &str)> = self
            .name_to_id
            .keys()
            .map(|candidate| (jaro_winkler(name, candidate), candidate.as_str()))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }
}
