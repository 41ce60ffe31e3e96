//! Axis-separated tile collision
//!
//! Movement resolves the vertical axis first, then the horizontal axis.
//! The order matters: landing happens before wall checks, so running over
//! a step reads as landing on it rather than hitting a wall. Each axis
//! builds a candidate rect at the moved position and checks it against the
//! solid tiles near the entity; a correction only applies when the current
//! rect is cleanly on the approaching side of the tile, which keeps fast
//! diagonal movement from snapping to the wrong face.
//!
//! Every overlapping tile gets to correct the position (no early exit), so
//! when several tiles overlap the candidate the last one in window order
//! wins. If no tile corrects an axis, the raw moved position commits
//! unchanged.

use crate::ui::Rect;

/// Tile window radius used for physics queries
pub const PHYSICS_RADIUS: usize = 3;

/// Outcome of resolving a vertical move
#[derive(Debug, Clone, Copy)]
pub struct VerticalResolution {
    /// Resolved hitbox bottom edge
    pub bottom: f32,
    pub vel_y: f32,
    /// Landed on top of a tile this resolution
    pub grounded: bool,
    /// Whether any tile corrected the move
    pub snapped: bool,
}

/// Outcome of resolving a horizontal move
#[derive(Debug, Clone, Copy)]
pub struct HorizontalResolution {
    /// Resolved hitbox left edge
    pub left: f32,
    pub vel_x: f32,
    /// Whether any tile corrected the move
    pub snapped: bool,
}

/// Resolve a vertical move of `current` by `vel_y`. Positive velocity is
/// upward, so the hitbox bottom moves to `current.bottom() - vel_y`.
pub fn resolve_vertical(solids: &[Rect], current: Rect, vel_y: f32) -> VerticalResolution {
    let new_bottom = current.bottom() - vel_y;
    let candidate = current.with_bottom(new_bottom);
    let mut out = VerticalResolution {
        bottom: new_bottom,
        vel_y,
        grounded: false,
        snapped: false,
    };
    for tile in solids {
        if !candidate.overlaps(tile) {
            continue;
        }
        if current.bottom() <= tile.y {
            // Coming down onto the tile: land on its top edge
            out.snapped = true;
            out.grounded = true;
            out.bottom = tile.y;
            if out.vel_y < 0.0 {
                out.vel_y = 0.0;
            }
        } else if current.y >= tile.bottom() {
            // Coming up into the tile: stop underneath it
            out.snapped = true;
            out.bottom = tile.bottom() + current.h;
            if out.vel_y > 0.0 {
                out.vel_y = 0.0;
            }
        }
    }
    out
}

/// Resolve a horizontal move of `current` by `vel_x`
pub fn resolve_horizontal(solids: &[Rect], current: Rect, vel_x: f32) -> HorizontalResolution {
    let new_left = current.x + vel_x;
    let candidate = current.with_left(new_left);
    let mut out = HorizontalResolution {
        left: new_left,
        vel_x,
        snapped: false,
    };
    for tile in solids {
        if !candidate.overlaps(tile) {
            continue;
        }
        if current.x >= tile.right() {
            // Moving left into the tile
            out.snapped = true;
            out.left = tile.right();
            if out.vel_x < 0.0 {
                out.vel_x = 0.0;
            }
        } else if current.right() <= tile.x {
            // Moving right into the tile
            out.snapped = true;
            out.left = tile.x - current.w;
            if out.vel_x > 0.0 {
                out.vel_x = 0.0;
            }
        }
    }
    out
}
