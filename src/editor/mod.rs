//! In-game level editor and the map browser
//!
//! - [`EditorState`] holds the map under edit and the UI state around it
//! - [`draw_editor`] renders the editor screen and routes mouse input
//! - [`draw_map_browser`] lists stored maps for the play flow

mod browser;
mod state;
mod view;

pub use browser::{draw_map_browser, BrowserAction};
pub use state::{Brush, EditorState};
pub use view::{draw_editor, EditorAction};
