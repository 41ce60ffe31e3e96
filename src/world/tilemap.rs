//! Column-major tile grid with pixel-space queries
//!
//! The grid is indexed `cells[col][row]` with row 0 at the top of the
//! screen. Physics and the editor never walk the whole grid per query;
//! they ask for a window of tiles around a point instead.

use super::{
    limits, MapRecord, SolidVariant, StoreError, Tile, TileKind, BACKGROUND_WIDTH,
    COLUMNS_PER_SPAN, MAP_ROWS, TILE_SIZE,
};
use crate::ui::Rect;

/// A tile paired with its grid position
#[derive(Debug, Clone, Copy)]
pub struct TileAt {
    pub col: usize,
    pub row: usize,
    pub tile: Tile,
}

impl TileAt {
    /// Pixel-space rect this tile covers
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.col as f32 * TILE_SIZE,
            self.row as f32 * TILE_SIZE,
            TILE_SIZE,
            TILE_SIZE,
        )
    }
}

/// The tile grid of one map
#[derive(Debug, Clone)]
pub struct TileMap {
    /// Indexed `cells[col][row]`
    cells: Vec<Vec<Tile>>,
    /// Map width in background spans
    width: u32,
}

impl TileMap {
    /// Empty map with a solid floor along the bottom row
    pub fn with_ground(width: u32) -> Self {
        let cols = width as usize * COLUMNS_PER_SPAN;
        let mut cells = vec![vec![Tile::empty(); MAP_ROWS]; cols];
        for col in cells.iter_mut() {
            col[MAP_ROWS - 1] = Tile::of_kind(TileKind::Solid);
        }
        let mut map = Self { cells, width };
        map.refresh_all_variants();
        map
    }

    /// Decode a stored map record, validating dimensions and tile codes
    pub fn from_record(record: &MapRecord) -> Result<Self, StoreError> {
        if record.width < limits::MIN_WIDTH || record.width > limits::MAX_WIDTH {
            return Err(StoreError::Validation(format!(
                "map width {} outside {}..={}",
                record.width,
                limits::MIN_WIDTH,
                limits::MAX_WIDTH
            )));
        }
        let expected_cols = record.width as usize * COLUMNS_PER_SPAN;
        if record.tilemap.len() != expected_cols {
            return Err(StoreError::Validation(format!(
                "map has {} columns, width {} needs {}",
                record.tilemap.len(),
                record.width,
                expected_cols
            )));
        }

        let mut cells = Vec::with_capacity(expected_cols);
        for (i, codes) in record.tilemap.iter().enumerate() {
            if codes.len() != MAP_ROWS {
                return Err(StoreError::Validation(format!(
                    "column {} has {} rows, expected {}",
                    i,
                    codes.len(),
                    MAP_ROWS
                )));
            }
            let mut col = Vec::with_capacity(MAP_ROWS);
            for (k, &code) in codes.iter().enumerate() {
                let kind = TileKind::from_code(code).ok_or_else(|| {
                    StoreError::Validation(format!(
                        "unknown tile code {} at column {} row {}",
                        code, i, k
                    ))
                })?;
                col.push(Tile::of_kind(kind));
            }
            cells.push(col);
        }

        let mut map = Self {
            cells,
            width: record.width,
        };
        map.refresh_all_variants();
        Ok(map)
    }

    /// Export the grid as record codes
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .iter()
            .map(|col| col.iter().map(|tile| tile.kind.code()).collect())
            .collect()
    }

    /// Map width in background spans
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.len()
    }

    /// Total width in pixels
    pub fn pixel_width(&self) -> f32 {
        self.width as f32 * BACKGROUND_WIDTH
    }

    /// Grid position of the tile containing a point, if any
    pub fn tile_index(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / TILE_SIZE) as usize;
        let row = (y / TILE_SIZE) as usize;
        if col >= self.cols() || row >= MAP_ROWS {
            return None;
        }
        Some((col, row))
    }

    /// Tile containing a point, if any
    pub fn get_tile(&self, x: f32, y: f32) -> Option<Tile> {
        let (col, row) = self.tile_index(x, y)?;
        Some(self.cells[col][row])
    }

    /// Tile at a grid position, if in bounds
    pub fn tile_at(&self, col: usize, row: usize) -> Option<Tile> {
        self.cells.get(col)?.get(row).copied()
    }

    /// Tiles in a `(2*radius - 1)` square window around the tile containing
    /// the point. Out-of-bounds cells are skipped; an out-of-bounds center
    /// yields no tiles at all.
    pub fn get_nearby_tiles(&self, x: f32, y: f32, radius: usize) -> Vec<TileAt> {
        let Some((center_col, center_row)) = self.tile_index(x, y) else {
            return Vec::new();
        };
        let mut nearby = Vec::new();
        let r = radius as isize;
        let lo_col = center_col as isize + 1 - r;
        let lo_row = center_row as isize + 1 - r;
        for i in 0..(2 * r - 1) {
            for k in 0..(2 * r - 1) {
                let col = lo_col + i;
                let row = lo_row + k;
                if col < 0 || row < 0 {
                    continue;
                }
                let (col, row) = (col as usize, row as usize);
                if col >= self.cols() || row >= MAP_ROWS {
                    continue;
                }
                nearby.push(TileAt {
                    col,
                    row,
                    tile: self.cells[col][row],
                });
            }
        }
        nearby
    }

    /// Pixel rects of the solid tiles near a point, for collision resolution
    pub fn nearby_solid_rects(&self, x: f32, y: f32, radius: usize) -> Vec<Rect> {
        self.get_nearby_tiles(x, y, radius)
            .into_iter()
            .filter(|t| t.tile.is_solid())
            .map(|t| t.rect())
            .collect()
    }

    /// Set the kind of one cell. Returns whether anything changed.
    /// Sprite variants are not refreshed; call [`refresh_variants_around`]
    /// after a batch of edits.
    ///
    /// [`refresh_variants_around`]: TileMap::refresh_variants_around
    pub fn change_type(&mut self, col: usize, row: usize, kind: TileKind) -> bool {
        if col >= self.cols() || row >= MAP_ROWS {
            return false;
        }
        if self.cells[col][row].kind == kind {
            return false;
        }
        self.cells[col][row] = Tile::of_kind(kind);
        true
    }

    /// Recompute solid sprite variants in a window around a cell
    pub fn refresh_variants_around(&mut self, col: usize, row: usize, radius: usize) {
        let r = radius as isize;
        let lo_col = col as isize + 1 - r;
        let lo_row = row as isize + 1 - r;
        for i in 0..(2 * r - 1) {
            for k in 0..(2 * r - 1) {
                let c = lo_col + i;
                let rw = lo_row + k;
                if c < 0 || rw < 0 {
                    continue;
                }
                let (c, rw) = (c as usize, rw as usize);
                if c >= self.cols() || rw >= MAP_ROWS {
                    continue;
                }
                self.refresh_variant(c, rw);
            }
        }
    }

    fn refresh_variant(&mut self, col: usize, row: usize) {
        if self.cells[col][row].is_solid() {
            let variant = self.variant_for(col, row);
            self.cells[col][row].variant = variant;
        }
    }

    fn refresh_all_variants(&mut self) {
        for col in 0..self.cols() {
            for row in 0..MAP_ROWS {
                self.refresh_variant(col, row);
            }
        }
    }

    fn variant_for(&self, col: usize, row: usize) -> SolidVariant {
        let solid = |c: isize, r: isize| -> bool {
            if c < 0 || r < 0 {
                return false;
            }
            self.tile_at(c as usize, r as usize)
                .is_some_and(|t| t.is_solid())
        };
        let (c, r) = (col as isize, row as isize);
        SolidVariant::from_neighbors(
            solid(c, r - 1),
            solid(c + 1, r),
            solid(c, r + 1),
            solid(c - 1, r),
        )
    }

    /// Place the 2x2 exit portal with its top-left quarter at the given
    /// cell. A map holds a single portal, so any previous one is removed.
    /// Returns false if the block does not fit or the portal is already
    /// there.
    pub fn place_portal(&mut self, col: usize, row: usize) -> bool {
        if col + 1 >= self.cols() || row + 1 >= MAP_ROWS {
            return false;
        }
        if self.portal_origin() == Some((col, row)) {
            return false;
        }
        for column in self.cells.iter_mut() {
            for tile in column.iter_mut() {
                if tile.is_portal() {
                    *tile = Tile::empty();
                }
            }
        }
        self.cells[col][row] = Tile::of_kind(TileKind::PortalA);
        self.cells[col + 1][row] = Tile::of_kind(TileKind::PortalB);
        self.cells[col][row + 1] = Tile::of_kind(TileKind::PortalC);
        self.cells[col + 1][row + 1] = Tile::of_kind(TileKind::PortalD);
        self.refresh_all_variants();
        true
    }

    /// Grid position of the portal's top-left quarter, if a portal exists
    pub fn portal_origin(&self) -> Option<(usize, usize)> {
        for (col, column) in self.cells.iter().enumerate() {
            for (row, tile) in column.iter().enumerate() {
                if tile.kind == TileKind::PortalA {
                    return Some((col, row));
                }
            }
        }
        None
    }

    /// Copy into a map of a different width, keeping the overlapping columns
    pub fn resized(&self, new_width: u32) -> Self {
        let new_cols = new_width as usize * COLUMNS_PER_SPAN;
        let mut cells = vec![vec![Tile::empty(); MAP_ROWS]; new_cols];
        for (col, column) in cells.iter_mut().enumerate().take(self.cols()) {
            for (row, tile) in column.iter_mut().enumerate() {
                *tile = Tile::of_kind(self.cells[col][row].kind);
            }
        }
        let mut map = Self {
            cells,
            width: new_width,
        };
        map.refresh_all_variants();
        map
    }

    /// Consume every spawn marker, returning the pixel position (tile
    /// top-left) where each enemy starts. The markers become empty tiles so
    /// they neither render nor spawn twice.
    pub fn take_enemy_spawns(&mut self) -> Vec<(f32, f32)> {
        let mut spawns = Vec::new();
        for (col, column) in self.cells.iter_mut().enumerate() {
            for (row, tile) in column.iter_mut().enumerate() {
                if tile.kind == TileKind::EnemySpawn {
                    spawns.push((col as f32 * TILE_SIZE, row as f32 * TILE_SIZE));
                    *tile = Tile::empty();
                }
            }
        }
        spawns
    }

    /// Iterate all cells with their grid positions
    pub fn iter_tiles(&self) -> impl Iterator<Item = TileAt> + '_ {
        self.cells.iter().enumerate().flat_map(|(col, column)| {
            column.iter().enumerate().map(move |(row, &tile)| TileAt {
                col,
                row,
                tile,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_from(map: &TileMap, name: &str) -> MapRecord {
        MapRecord {
            name: name.to_string(),
            tilemap: map.to_codes(),
            width: map.width(),
        }
    }

    #[test]
    fn test_codes_round_trip() {
        let mut map = TileMap::with_ground(1);
        map.change_type(4, 8, TileKind::Solid);
        map.change_type(10, 11, TileKind::EnemySpawn);
        map.place_portal(15, 9);

        let record = record_from(&map, "round trip");
        let restored = TileMap::from_record(&record).unwrap();
        assert_eq!(restored.to_codes(), map.to_codes());
        assert_eq!(restored.width(), 1);
    }

    #[test]
    fn test_from_record_rejects_bad_codes() {
        let mut record = record_from(&TileMap::with_ground(1), "bad");
        record.tilemap[3][5] = 9;
        match TileMap::from_record(&record) {
            Err(StoreError::Validation(msg)) => {
                assert!(msg.contains("unknown tile code 9"), "got: {}", msg);
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_from_record_rejects_short_column() {
        let mut record = record_from(&TileMap::with_ground(1), "short");
        record.tilemap[0].pop();
        assert!(TileMap::from_record(&record).is_err());
    }

    #[test]
    fn test_get_tile_out_of_bounds() {
        let map = TileMap::with_ground(1);
        assert!(map.get_tile(-1.0, 50.0).is_none());
        assert!(map.get_tile(50.0, -0.1).is_none());
        assert!(map.get_tile(BACKGROUND_WIDTH + 1.0, 50.0).is_none());
        assert!(map.get_tile(50.0, MAP_ROWS as f32 * TILE_SIZE + 1.0).is_none());
        let tile = map.get_tile(50.0, 12.5 * TILE_SIZE).unwrap();
        assert!(tile.is_solid());
    }

    #[test]
    fn test_nearby_window_size() {
        let map = TileMap::with_ground(2);
        // Center away from every edge: full (2r-1)^2 windows
        let center = (10.5 * TILE_SIZE, 6.5 * TILE_SIZE);
        assert_eq!(map.get_nearby_tiles(center.0, center.1, 3).len(), 25);
        assert_eq!(map.get_nearby_tiles(center.0, center.1, 2).len(), 9);
        // Top-left corner: the window is clipped to the map
        assert_eq!(map.get_nearby_tiles(1.0, 1.0, 2).len(), 4);
        // Out-of-bounds center finds nothing
        assert!(map.get_nearby_tiles(-5.0, 1.0, 3).is_empty());
    }

    #[test]
    fn test_nearby_solid_rects_filters() {
        let mut map = TileMap::with_ground(1);
        map.change_type(10, 11, TileKind::EnemySpawn);
        let rects = map.nearby_solid_rects(10.5 * TILE_SIZE, 11.5 * TILE_SIZE, 2);
        // The 3x3 window spans rows 10..=12: only the three floor tiles are solid
        assert_eq!(rects.len(), 3);
        for rect in rects {
            assert_eq!(rect.y, 12.0 * TILE_SIZE);
        }
    }

    #[test]
    fn test_change_type_reports_change() {
        let mut map = TileMap::with_ground(1);
        assert!(map.change_type(5, 5, TileKind::Solid));
        assert!(!map.change_type(5, 5, TileKind::Solid));
        assert!(map.change_type(5, 5, TileKind::Empty));
        assert!(!map.change_type(map.cols(), 0, TileKind::Solid));
    }

    #[test]
    fn test_variants_after_refresh() {
        let mut map = TileMap::with_ground(1);
        // The floor row has no support below, so it reads as a strip
        assert_eq!(map.tile_at(0, 12).unwrap().variant, SolidVariant::StripLeft);
        assert_eq!(map.tile_at(1, 12).unwrap().variant, SolidVariant::StripMid);
        assert_eq!(
            map.tile_at(19, 12).unwrap().variant,
            SolidVariant::StripRight
        );

        // Stack a block on the floor: the floor tile gets buried and the
        // block becomes a column cap
        map.change_type(5, 11, TileKind::Solid);
        map.refresh_variants_around(5, 11, 2);
        assert_eq!(map.tile_at(5, 12).unwrap().variant, SolidVariant::Covered);
        assert_eq!(map.tile_at(5, 11).unwrap().variant, SolidVariant::ColumnCap);
    }

    #[test]
    fn test_place_portal_is_single() {
        let mut map = TileMap::with_ground(1);
        assert!(map.place_portal(5, 5));
        assert_eq!(map.tile_at(5, 5).unwrap().kind, TileKind::PortalA);
        assert_eq!(map.tile_at(6, 5).unwrap().kind, TileKind::PortalB);
        assert_eq!(map.tile_at(5, 6).unwrap().kind, TileKind::PortalC);
        assert_eq!(map.tile_at(6, 6).unwrap().kind, TileKind::PortalD);

        // Placing again elsewhere moves the whole block
        assert!(map.place_portal(10, 3));
        let portal_tiles = map.iter_tiles().filter(|t| t.tile.is_portal()).count();
        assert_eq!(portal_tiles, 4);
        assert_eq!(map.portal_origin(), Some((10, 3)));

        // Same origin again is a no-op
        assert!(!map.place_portal(10, 3));
        // Does not fit against the right edge
        assert!(!map.place_portal(map.cols() - 1, 3));
    }

    #[test]
    fn test_resized_preserves_overlap() {
        let mut map = TileMap::with_ground(2);
        map.change_type(25, 4, TileKind::Solid);
        map.change_type(3, 4, TileKind::EnemySpawn);

        let narrow = map.resized(1);
        assert_eq!(narrow.cols(), COLUMNS_PER_SPAN);
        assert_eq!(narrow.tile_at(3, 4).unwrap().kind, TileKind::EnemySpawn);

        let wide = narrow.resized(2);
        assert_eq!(wide.cols(), 2 * COLUMNS_PER_SPAN);
        assert_eq!(wide.tile_at(3, 4).unwrap().kind, TileKind::EnemySpawn);
        // New columns start empty
        assert_eq!(wide.tile_at(25, 4).unwrap().kind, TileKind::Empty);
        assert_eq!(wide.tile_at(25, 12).unwrap().kind, TileKind::Empty);
    }

    #[test]
    fn test_take_enemy_spawns_consumes() {
        let mut map = TileMap::with_ground(1);
        map.change_type(4, 11, TileKind::EnemySpawn);
        map.change_type(9, 11, TileKind::EnemySpawn);

        let spawns = map.take_enemy_spawns();
        assert_eq!(
            spawns,
            vec![(4.0 * TILE_SIZE, 11.0 * TILE_SIZE), (9.0 * TILE_SIZE, 11.0 * TILE_SIZE)]
        );
        assert_eq!(map.tile_at(4, 11).unwrap().kind, TileKind::Empty);
        assert!(map.take_enemy_spawns().is_empty());
    }
}
