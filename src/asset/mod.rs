//! Runtime assets: generated art, collision masks and sounds
//!
//! Art is painted at startup rather than loaded from disk (see
//! [`sprites`]); the collision masks come from the same images. Sounds are
//! the only assets read from files, and all of them are optional.

mod audio;
mod sprites;

pub use audio::SoundBank;
pub use sprites::{build_masks, generate_art, verify_art, GeneratedArt, SpriteSet, TextureBook};

use crate::game::{EntityClass, EntityState, MaskBook};

#[derive(Debug)]
pub enum AssetError {
    MissingAnimation {
        class: EntityClass,
        state: EntityState,
    },
    FrameCount {
        class: EntityClass,
        state: EntityState,
        expected: usize,
        actual: usize,
    },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::MissingAnimation { class, state } => {
                write!(f, "no animation frames for {:?} {:?}", class, state)
            }
            AssetError::FrameCount {
                class,
                state,
                expected,
                actual,
            } => write!(
                f,
                "{:?} {:?} has {} frames, expected {}",
                class, state, actual, expected
            ),
        }
    }
}

/// Everything the running game needs in hand
pub struct GameAssets {
    pub textures: TextureBook,
    pub masks: MaskBook,
    pub sounds: SoundBank,
}

impl GameAssets {
    /// Paint the art, check it against the animation tables, build masks
    /// from the same images, upload the textures and load whatever sounds
    /// exist on disk.
    pub async fn load() -> Result<GameAssets, AssetError> {
        let art = generate_art();
        verify_art(&art)?;
        let masks = build_masks(&art);
        let textures = TextureBook::upload(&art);
        let sounds = SoundBank::load().await;
        Ok(GameAssets {
            textures,
            masks,
            sounds,
        })
    }
}
