//! Pixel masks for sprite-overlap combat
//!
//! Combat does not use hitboxes: two entities interact when the opaque
//! pixels of their current frames overlap. Masks are extracted from the
//! sprite images once at load and live on the CPU, so the whole combat
//! path runs without a graphics context.

use super::{EntityClass, EntityState, Facing};
use macroquad::texture::Image;

/// Opaque-pixel mask of one sprite frame
#[derive(Debug, Clone)]
pub struct SpriteMask {
    w: usize,
    h: usize,
    bits: Vec<bool>,
}

impl SpriteMask {
    /// Build from an image's alpha channel
    pub fn from_alpha(image: &Image) -> Self {
        let w = image.width();
        let h = image.height();
        let mut bits = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                bits.push(image.get_pixel(x as u32, y as u32).a > 0.5);
            }
        }
        Self { w, h, bits }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    fn get(&self, x: usize, y: usize) -> bool {
        self.bits[y * self.w + x]
    }

    /// Horizontally mirrored copy, for left-facing frames
    pub fn flipped_horizontal(&self) -> Self {
        let mut bits = Vec::with_capacity(self.w * self.h);
        for y in 0..self.h {
            for x in 0..self.w {
                bits.push(self.get(self.w - 1 - x, y));
            }
        }
        Self {
            w: self.w,
            h: self.h,
            bits,
        }
    }

    /// Whether any opaque pixel of `other` lands on an opaque pixel of
    /// `self`. `(dx, dy)` is the position of `other`'s top-left corner
    /// relative to `self`'s.
    pub fn overlap(&self, other: &SpriteMask, dx: i32, dy: i32) -> bool {
        let x0 = dx.max(0);
        let y0 = dy.max(0);
        let x1 = (dx + other.w as i32).min(self.w as i32);
        let y1 = (dy + other.h as i32).min(self.h as i32);
        for y in y0..y1 {
            for x in x0..x1 {
                if self.get(x as usize, y as usize)
                    && other.get((x - dx) as usize, (y - dy) as usize)
                {
                    return true;
                }
            }
        }
        false
    }
}

/// Masks for every state, facing and frame of one entity class
pub struct MaskSet {
    /// Indexed `[state][facing]` -> one mask per animation frame
    masks: [[Vec<SpriteMask>; 2]; EntityState::COUNT],
}

impl MaskSet {
    pub fn new(masks: [[Vec<SpriteMask>; 2]; EntityState::COUNT]) -> Self {
        Self { masks }
    }

    /// Mask of the frame an entity currently shows. Frame indices wrap the
    /// same way animation stepping does.
    pub fn mask(&self, state: EntityState, facing: Facing, frame: usize) -> &SpriteMask {
        let frames = &self.masks[state.index()][facing.index()];
        &frames[frame % frames.len()]
    }

    pub fn frame_count(&self, state: EntityState, facing: Facing) -> usize {
        self.masks[state.index()][facing.index()].len()
    }
}

/// Masks for both entity classes; all the simulation needs for combat
pub struct MaskBook {
    pub player: MaskSet,
    pub enemy: MaskSet,
}

impl MaskBook {
    pub fn for_class(&self, class: EntityClass) -> &MaskSet {
        match class {
            EntityClass::Player => &self.player,
            EntityClass::Enemy => &self.enemy,
        }
    }
}
