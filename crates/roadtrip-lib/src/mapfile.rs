//! Loading road maps from their text description.
//!
//! A map is a stream of whitespace-separated tokens. Each record starts with
//! a one-character tag:
//!
//! ```text
//! L <name> <x> <y>
//! R <from> <road> <length> <direction> <to>
//! ```
//!
//! Records may span lines; only token order matters. Loading stops at the
//! first bad record and no network is returned, so callers never see a
//! partially built map.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::SplitWhitespace;

use tracing::{debug, warn};

use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::network::{DuplicateRoadPolicy, RoadNetwork};

/// Options controlling how a map is loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    pub duplicate_roads: DuplicateRoadPolicy,
}

/// Load a map file with default options.
pub fn load_map(path: &Path) -> Result<RoadNetwork> {
    load_map_with(path, LoadOptions::default())
}

/// Load a map file.
pub fn load_map_with(path: &Path, options: LoadOptions) -> Result<RoadNetwork> {
    let text = fs::read_to_string(path).map_err(|source| Error::FileUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "loading road map");
    parse_map_with(&text, options)
}

/// Load a map from a reader (e.g., stdin or an in-memory buffer).
///
/// Input that cannot be read as UTF-8 text is reported as a malformed map
/// with entry number 0, since no record has been read yet.
pub fn read_map<R: Read>(mut reader: R, options: LoadOptions) -> Result<RoadNetwork> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|err| Error::MalformedMapEntry {
            entry: 0,
            reason: format!("cannot read map input: {err}"),
        })?;
    parse_map_with(&text, options)
}

/// Parse a map description with default options.
pub fn parse_map(text: &str) -> Result<RoadNetwork> {
    parse_map_with(text, LoadOptions::default())
}

/// Parse a map description.
pub fn parse_map_with(text: &str, options: LoadOptions) -> Result<RoadNetwork> {
    let mut network = RoadNetwork::with_policy(options.duplicate_roads);
    let mut records = Records {
        tokens: text.split_whitespace(),
        entry: 0,
    };

    while let Some(tag) = records.next_tag() {
        match tag {
            "L" => {
                let name = records.word()?;
                let x = records.number()?;
                let y = records.number()?;
                network.add_location(name, x, y)?;
            }
            "R" => {
                let from = records.word()?;
                let road = records.word()?;
                let length = records.number()?;
                let direction = records.direction()?;
                let to = records.word()?;
                network.add_road(from, road, length, direction, to)?;
            }
            other => return Err(records.malformed(format!("unknown type '{other}'"))),
        }
    }

    debug!(
        entries = records.entry,
        locations = network.location_count(),
        roads = network.road_count(),
        "road map loaded"
    );

    let shortcuts = network.shortcut_roads();
    if !shortcuts.is_empty() {
        warn!(
            count = shortcuts.len(),
            "roads shorter than the straight-line distance between their ends; \
             a-star results may not be optimal"
        );
    }

    Ok(network)
}

/// Token cursor that tracks the ordinal of the record being read.
struct Records<'a> {
    tokens: SplitWhitespace<'a>,
    entry: usize,
}

impl<'a> Records<'a> {
    fn next_tag(&mut self) -> Option<&'a str> {
        let tag = self.tokens.next()?;
        self.entry += 1;
        Some(tag)
    }

    fn word(&mut self) -> Result<&'a str> {
        self.tokens
            .next()
            .ok_or_else(|| self.malformed("entry incomplete at end of input".to_string()))
    }

    fn number(&mut self) -> Result<f64> {
        let token = self.word()?;
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(self.malformed(format!("expected a number, found '{token}'"))),
        }
    }

    fn direction(&mut self) -> Result<Direction> {
        let token = self.word()?;
        token
            .parse::<Direction>()
            .map_err(|err| self.malformed(err.to_string()))
    }

    fn malformed(&self, reason: String) -> Error {
        Error::MalformedMapEntry {
            entry: self.entry,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("device unplugged"))
        }
    }

    #[test]
    fn unreadable_input_is_malformed() {
        let bytes: &[u8] = b"L A 0 0 L \xff\xfe 1 1";
        let err = read_map(bytes, LoadOptions::default()).unwrap_err();
        assert!(matches!(err, Error::MalformedMapEntry { entry: 0, .. }));

        let err = read_map(BrokenReader, LoadOptions::default()).unwrap_err();
        match err {
            Error::MalformedMapEntry { entry, reason } => {
                assert_eq!(entry, 0);
                assert!(reason.contains("device unplugged"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn loop_road_fails_the_load() {
        let err = parse_map("L A 0 0 R A Loop 2 N A").unwrap_err();
        assert!(matches!(err, Error::LoopRoad { ref location, .. } if location == "A"));
    }

    #[test]
    fn records_may_span_lines() {
        let network = parse_map("L A 0 0\nL\nB 1\n0 R A Main\n1.5 E\nB").unwrap();
        assert_eq!(network.location_count(), 2);
        assert_eq!(network.road_count(), 2);
    }

    #[test]
    fn empty_input_is_empty_network() {
        let network = parse_map("  \n\t").unwrap();
        assert!(network.is_empty());
    }

    #[test]
    fn unknown_tag_reports_ordinal() {
        let err = parse_map("L A 0 0\nL B 1 1\nX A B").unwrap_err();
        assert!(matches!(err, Error::MalformedMapEntry { entry: 3, .. }));
    }

    #[test]
    fn non_numeric_coordinate_is_malformed() {
        let err = parse_map("L A zero 0").unwrap_err();
        match err {
            Error::MalformedMapEntry { entry, reason } => {
                assert_eq!(entry, 1);
                assert!(reason.contains("'zero'"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn infinite_length_is_malformed() {
        let err = parse_map("L A 0 0 L B 1 0 R A Main inf E B").unwrap_err();
        assert!(matches!(err, Error::MalformedMapEntry { entry: 3, .. }));
    }

    #[test]
    fn truncated_record_is_malformed() {
        let err = parse_map("L A 0 0\nR A Main 2.0 E").unwrap_err();
        match err {
            Error::MalformedMapEntry { entry, reason } => {
                assert_eq!(entry, 2);
                assert!(reason.contains("incomplete"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn bad_direction_is_malformed() {
        let err = parse_map("L A 0 0 L B 1 0 R A Main 1 up B").unwrap_err();
        match err {
            Error::MalformedMapEntry { entry, reason } => {
                assert_eq!(entry, 3);
                assert_eq!(reason, "unknown direction 'up'");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn overwrite_policy_accepts_repeated_roads() {
        let text = "L A 0 0 L B 1 0 R A Main 1 E B R A Main 2 E B";
        assert!(matches!(
            parse_map(text),
            Err(Error::DuplicateRoad { .. })
        ));
        let network = parse_map_with(
            text,
            LoadOptions {
                duplicate_roads: DuplicateRoadPolicy::Overwrite,
            },
        )
        .unwrap();
        assert_eq!(network.weight(0, 1), 2.0);
    }
}
