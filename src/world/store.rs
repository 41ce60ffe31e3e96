//! On-disk map store
//!
//! Maps live in a single JSON file as `{"maps": [...]}` where each record
//! carries the name, the column-major tile codes and the width in
//! background spans. The file is rewritten in full on every save.

use super::{TileKind, TileMap};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Validation limits for stored maps
pub mod limits {
    /// Maximum characters in a map name
    pub const MAX_NAME_LEN: usize = 24;
    /// Minimum map width in background spans
    pub const MIN_WIDTH: u32 = 1;
    /// Maximum map width in background spans
    pub const MAX_WIDTH: u32 = 8;
}

/// Error type for the map store
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Validation(String),
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Parse(e)
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "IO error: {}", e),
            StoreError::Parse(e) => write!(f, "Parse error: {}", e),
            StoreError::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

/// One stored map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapRecord {
    pub name: String,
    /// Tile codes indexed `[col][row]`
    pub tilemap: Vec<Vec<u8>>,
    /// Width in background spans
    pub width: u32,
}

#[derive(Deserialize)]
struct StoreFile {
    maps: Vec<MapRecord>,
}

#[derive(Serialize)]
struct StoreFileRef<'a> {
    maps: &'a [MapRecord],
}

/// All known maps plus the file they persist to
pub struct MapStore {
    path: PathBuf,
    maps: Vec<MapRecord>,
}

impl MapStore {
    /// Load the store, or start from the built-in map when the file does
    /// not exist yet
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self {
                path,
                maps: default_maps(),
            });
        }
        let text = fs::read_to_string(&path)?;
        let file: StoreFile = serde_json::from_str(&text)?;
        Ok(Self {
            path,
            maps: file.maps,
        })
    }

    /// Fresh store with only the built-in map, ignoring anything on disk
    pub fn with_defaults(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            maps: default_maps(),
        }
    }

    pub fn maps(&self) -> &[MapRecord] {
        &self.maps
    }

    pub fn get(&self, index: usize) -> Option<&MapRecord> {
        self.maps.get(index)
    }

    /// Append a new map and persist the store. Names must be non-empty and
    /// unused.
    pub fn save_map(
        &mut self,
        name: &str,
        tilemap: Vec<Vec<u8>>,
        width: u32,
    ) -> Result<(), StoreError> {
        if name.is_empty() {
            return Err(StoreError::Validation("Name Empty.".to_string()));
        }
        if self.maps.iter().any(|m| m.name == name) {
            return Err(StoreError::Validation("Duplicate Name.".to_string()));
        }
        self.maps.push(MapRecord {
            name: name.to_string(),
            tilemap,
            width,
        });
        self.write()
    }

    fn write(&self) -> Result<(), StoreError> {
        let text = serde_json::to_string(&StoreFileRef { maps: &self.maps })?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

/// The map every install starts with: flat ground, a floating platform,
/// two enemies and the exit portal near the right edge
fn default_maps() -> Vec<MapRecord> {
    let mut map = TileMap::with_ground(2);
    for col in 10..=13 {
        map.change_type(col, 8, TileKind::Solid);
    }
    map.change_type(15, 11, TileKind::EnemySpawn);
    map.change_type(30, 11, TileKind::EnemySpawn);
    map.place_portal(36, 10);
    vec![MapRecord {
        name: "Plains".to_string(),
        tilemap: map.to_codes(),
        width: map.width(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("maps.json")
    }

    #[test]
    fn test_missing_file_yields_default_map() {
        let dir = tempfile::tempdir().unwrap();
        let store = MapStore::load(store_path(&dir)).unwrap();
        assert_eq!(store.maps().len(), 1);
        assert_eq!(store.maps()[0].name, "Plains");
        // The built-in map must decode cleanly
        TileMap::from_record(&store.maps()[0]).unwrap();
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let mut store = MapStore::load(&path).unwrap();
        let map = TileMap::with_ground(1);
        store.save_map("My Map", map.to_codes(), map.width()).unwrap();

        let reloaded = MapStore::load(&path).unwrap();
        assert_eq!(reloaded.maps().len(), 2);
        assert_eq!(reloaded.maps()[1].name, "My Map");
        assert_eq!(reloaded.maps()[1].tilemap, map.to_codes());
        assert_eq!(reloaded.maps()[1].width, 1);
    }

    #[test]
    fn test_save_rejects_empty_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = MapStore::load(store_path(&dir)).unwrap();
        match store.save_map("", Vec::new(), 1) {
            Err(StoreError::Validation(msg)) => assert_eq!(msg, "Name Empty."),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_rejects_duplicate_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = MapStore::load(store_path(&dir)).unwrap();
        let codes = TileMap::with_ground(1).to_codes();
        match store.save_map("Plains", codes, 1) {
            Err(StoreError::Validation(msg)) => assert_eq!(msg, "Duplicate Name."),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        fs::write(&path, "not json at all").unwrap();
        match MapStore::load(&path) {
            Err(StoreError::Parse(_)) => {}
            other => panic!("expected parse error, got {:?}", other.map(|s| s.maps.len())),
        }
    }
}
