//! Input handling
//!
//! Keyboard and mouse are primary; a gamepad (gamepads crate) mirrors
//! the same actions. Each frame is condensed into one [`FrameInput`]
//! snapshot so the simulation never touches device APIs directly.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
