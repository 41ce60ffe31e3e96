//! World module - the tile grid maps are built from
//!
//! - Column-major tile grid with neighbor-aware sprite selection
//! - Tile queries used by physics (windows of nearby tiles)
//! - JSON map store for saving and loading user maps

mod store;
mod tile;
mod tilemap;

pub use store::*;
pub use tile::*;
pub use tilemap::*;

/// Edge length of a map tile in pixels
pub const TILE_SIZE: f32 = 32.0;

/// Every map is this many tiles tall; the bottom row pokes below the screen
pub const MAP_ROWS: usize = 13;

/// Columns covered by one background span
pub const COLUMNS_PER_SPAN: usize = 20;

/// Pixel width of one background span
pub const BACKGROUND_WIDTH: f32 = COLUMNS_PER_SPAN as f32 * TILE_SIZE;
