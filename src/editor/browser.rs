//! Map selection screen
//!
//! One row per stored map with a select button, plus a back button. Layout
//! follows the menu screens: rows stacked from y=100 with a 10px gap.

use crate::ui::{self, theme, Rect, UiContext};
use crate::world::MapStore;

/// What the browser asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserAction {
    None,
    Back,
    /// Start a session on the map at this store index
    Play(usize),
}

pub fn draw_map_browser(store: &MapStore, ui: &mut UiContext) -> BrowserAction {
    if ui::text_button(ui, Rect::new(10.0, 10.0, 80.0, 32.0), "Back") {
        return BrowserAction::Back;
    }

    for (index, record) in store.maps().iter().enumerate() {
        let row = Rect::new(10.0, 100.0 + index as f32 * 60.0, 580.0, 50.0);
        ui::draw_panel(&row, theme::ITEM_BG);

        let name_strip = Rect::new(row.x + 10.0, row.y, 300.0, row.h);
        ui::draw_text_left(&record.name, &name_strip, theme::FONT_SIZE_HEADER, theme::TEXT_COLOR);

        let select = Rect::new(row.right() - 81.0, row.y + 7.0, 76.0, 36.0);
        if ui::text_button(ui, select, "Select") {
            return BrowserAction::Play(index);
        }
    }

    BrowserAction::None
}
