//! Common test utilities and fixture helpers.
//!
//! Integration tests share the Bay Area fixture map and a small temporary
//! directory helper for writing map files to disk.

use std::fs;
use std::path::{Path, PathBuf};

use roadtrip_lib::{load_map, RoadNetwork};
use tempfile::TempDir;

/// Path to the fixtures directory shared by the workspace.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the Bay Area fixture map.
pub fn fixture_map_path() -> PathBuf {
    fixtures_dir().join("bay_area.map")
}

/// Load the Bay Area fixture map.
#[allow(dead_code)]
pub fn bay_area() -> RoadNetwork {
    load_map(&fixture_map_path()).expect("fixture map loads")
}

/// Temporary directory holding map files written by a test.
#[allow(dead_code)]
pub struct MapTestEnv {
    /// Temp directory (dropped on struct drop)
    _temp_dir: TempDir,
}

#[allow(dead_code)]
impl MapTestEnv {
    pub fn new() -> Self {
        Self {
            _temp_dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Write `contents` to a file named `name` and return its path.
    pub fn write_map(&self, name: &str, contents: &str) -> PathBuf {
        let path = self._temp_dir.path().join(name);
        fs::write(&path, contents).expect("write map file");
        path
    }

    pub fn temp_path(&self) -> &Path {
        self._temp_dir.path()
    }
}

impl Default for MapTestEnv {
    fn default() -> Self {
        Self::new()
    }
}
