//! Immediate-mode UI library
//!
//! Shared by the menus, in-game HUD and the level editor:
//! - Rectangle-based layout
//! - Text buttons reporting clicks via return values
//! - Macroquad integration for rendering
//!
//! Design principles:
//! - Immediate mode (no retained state, rebuilt each frame)
//! - Screens return action enums instead of mutating app state directly

mod input;
mod rect;
mod text_input;
pub mod theme;
mod widgets;

pub use input::*;
pub use rect::*;
pub use text_input::*;
pub use widgets::*;
