//! Editor session state
//!
//! Owns the map being edited plus the transient UI state around it (brush,
//! scroll, save dialog, status line). All mutation goes through methods so
//! the view stays a plain draw pass. Time comes in as a parameter, which
//! keeps the status-line timeout testable.

use crate::game::VIEW_WIDTH;
use crate::ui::TextInputState;
use crate::world::{limits, MapStore, StoreError, TileKind, TileMap};

/// Seconds a status message stays visible
const STATUS_SECS: f64 = 3.0;

/// Pixels one arrow click scrolls
const SCROLL_STEP: f32 = 100.0;

/// Painting refreshes tile variants in this window around the cell
const REFRESH_RADIUS: usize = 2;

/// What the paint brush lays down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brush {
    Erase,
    Solid,
    Spawn,
    Portal,
}

impl Brush {
    pub const ALL: [Brush; 4] = [Brush::Erase, Brush::Solid, Brush::Spawn, Brush::Portal];

    pub fn label(&self) -> &'static str {
        match self {
            Brush::Erase => "Erase",
            Brush::Solid => "Ground",
            Brush::Spawn => "Enemy",
            Brush::Portal => "Portal",
        }
    }
}

pub struct EditorState {
    map: TileMap,
    offset_x: f32,
    brush: Brush,
    /// Cell painted most recently in the current drag
    last_painted: Option<(usize, usize)>,
    /// `Some` while the save dialog is open
    pub save_name: Option<TextInputState>,
    status: Option<(String, f64)>,
}

impl EditorState {
    pub fn new() -> Self {
        EditorState {
            map: TileMap::with_ground(2),
            offset_x: 0.0,
            brush: Brush::Solid,
            last_painted: None,
            save_name: None,
            status: None,
        }
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    pub fn brush(&self) -> Brush {
        self.brush
    }

    pub fn set_brush(&mut self, brush: Brush) {
        self.brush = brush;
    }

    /// Scroll one arrow step left (-1) or right (+1), staying inside the
    /// map.
    pub fn scroll(&mut self, direction: f32) {
        let max = (self.map.pixel_width() - VIEW_WIDTH).max(0.0);
        self.offset_x = (self.offset_x + direction * SCROLL_STEP).clamp(0.0, max);
    }

    /// Paint with the current brush at a screen position. The portal brush
    /// acts only on the initial press; the cell brushes paint through a
    /// drag, skipping the cell painted last so holding the button still
    /// does one variant refresh per cell.
    pub fn paint(&mut self, screen_x: f32, screen_y: f32, just_pressed: bool, now_s: f64) {
        let Some((col, row)) = self.map.tile_index(screen_x + self.offset_x, screen_y) else {
            return;
        };

        match self.brush {
            Brush::Portal => {
                if just_pressed && !self.map.place_portal(col, row) {
                    self.set_status("Portal needs a 2x2 space.", now_s);
                }
            }
            brush => {
                if !just_pressed && self.last_painted == Some((col, row)) {
                    return;
                }
                let kind = match brush {
                    Brush::Erase => TileKind::Empty,
                    Brush::Solid => TileKind::Solid,
                    Brush::Spawn => TileKind::EnemySpawn,
                    Brush::Portal => unreachable!(),
                };
                if self.map.change_type(col, row, kind) {
                    self.map.refresh_variants_around(col, row, REFRESH_RADIUS);
                }
            }
        }
        self.last_painted = Some((col, row));
    }

    /// Forget the drag state when the button comes back up
    pub fn end_paint(&mut self) {
        self.last_painted = None;
    }

    /// Grow or shrink the map by whole background spans, preserving the
    /// overlapping content. Scroll is pulled back in range if the map
    /// shrank under it.
    pub fn adjust_width(&mut self, delta: i32) {
        let width = (self.map.width() as i32 + delta)
            .clamp(limits::MIN_WIDTH as i32, limits::MAX_WIDTH as i32) as u32;
        if width == self.map.width() {
            return;
        }
        self.map = self.map.resized(width);
        let max = (self.map.pixel_width() - VIEW_WIDTH).max(0.0);
        self.offset_x = self.offset_x.min(max);
    }

    pub fn open_save_dialog(&mut self) {
        self.save_name = Some(TextInputState::new("", limits::MAX_NAME_LEN));
    }

    pub fn close_save_dialog(&mut self) {
        self.save_name = None;
    }

    /// Try to persist the map under the dialog name. Validation problems
    /// land in the status line and keep the dialog open; success closes it.
    pub fn save(&mut self, store: &mut MapStore, now_s: f64) {
        let Some(input) = &self.save_name else {
            return;
        };
        let name = input.text.clone();
        match store.save_map(&name, self.map.to_codes(), self.map.width()) {
            Ok(()) => {
                self.save_name = None;
                self.set_status(format!("Saved {name}."), now_s);
            }
            Err(StoreError::Validation(message)) => self.set_status(message, now_s),
            Err(e) => {
                eprintln!("Failed to save map: {e}");
                self.set_status("Save failed.", now_s);
            }
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>, now_s: f64) {
        self.status = Some((message.into(), now_s + STATUS_SECS));
    }

    /// Status text, if it has not expired yet
    pub fn status_line(&self, now_s: f64) -> Option<&str> {
        match &self.status {
            Some((message, expires)) if now_s < *expires => Some(message),
            _ => None,
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
