//! Editor screen: toolbar, scroll arrows, paint surface, save dialog
//!
//! The map itself is drawn by the shared tile renderer; this file adds the
//! chrome around it and feeds mouse input to [`EditorState`]. Clicks are
//! kept apart by geometry: anything inside the toolbar, the arrows or an
//! open dialog never paints.

use macroquad::prelude::*;

use super::state::{Brush, EditorState};
use crate::asset::GameAssets;
use crate::game::renderer::{draw_background, draw_tiles};
use crate::ui::{self, theme, Rect, UiContext};
use crate::world::MapStore;

/// What the editor screen asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    None,
    Back,
}

const TOOLBAR: Rect = Rect::new(0.0, 0.0, 600.0, 52.0);
const ARROW_LEFT: Rect = Rect::new(8.0, 182.0, 36.0, 36.0);
const ARROW_RIGHT: Rect = Rect::new(556.0, 182.0, 36.0, 36.0);

pub fn draw_editor(
    state: &mut EditorState,
    store: &mut MapStore,
    assets: &GameAssets,
    ui: &mut UiContext,
    now_s: f64,
) -> EditorAction {
    let mouse = ui.mouse;

    draw_background(&assets.textures, state.offset_x(), state.map().width());
    draw_tiles(state.map(), state.offset_x(), &assets.textures);

    // Toolbar
    draw_rectangle(TOOLBAR.x, TOOLBAR.y, TOOLBAR.w, TOOLBAR.h, theme::HEADER_COLOR);

    let mut action = EditorAction::None;
    if ui::text_button(ui, Rect::new(8.0, 8.0, 60.0, 36.0), "Back") {
        action = EditorAction::Back;
    }

    let mut x = 76.0;
    for brush in Brush::ALL {
        let rect = Rect::new(x, 8.0, 64.0, 36.0);
        if ui::toggle_button(ui, rect, brush.label(), state.brush() == brush) {
            state.set_brush(brush);
        }
        x += 68.0;
    }

    if ui::text_button(ui, Rect::new(352.0, 8.0, 28.0, 36.0), "-") {
        state.adjust_width(-1);
    }
    let width_label = format!("Span {}", state.map().width());
    ui::draw_text_centered(
        &width_label,
        &Rect::new(382.0, 8.0, 48.0, 36.0),
        theme::FONT_SIZE_CONTENT,
        theme::TEXT_COLOR,
    );
    if ui::text_button(ui, Rect::new(432.0, 8.0, 28.0, 36.0), "+") {
        state.adjust_width(1);
    }

    if ui::text_button(ui, Rect::new(528.0, 8.0, 64.0, 36.0), "Save") {
        state.open_save_dialog();
    }

    // Scroll arrows at the screen edges
    if ui::text_button(ui, ARROW_LEFT, "<") {
        state.scroll(-1.0);
    }
    if ui::text_button(ui, ARROW_RIGHT, ">") {
        state.scroll(1.0);
    }

    if let Some(message) = state.status_line(now_s) {
        let strip = Rect::new(0.0, 360.0, 600.0, 24.0);
        ui::draw_text_centered(message, &strip, theme::FONT_SIZE_CONTENT, theme::ACCENT_COLOR);
    }

    if state.save_name.is_some() {
        draw_save_dialog(state, store, ui, now_s);
        return action;
    }

    // Paint wherever the cursor is not over chrome
    let over_chrome =
        mouse.inside(&TOOLBAR) || mouse.inside(&ARROW_LEFT) || mouse.inside(&ARROW_RIGHT);
    if !over_chrome && (mouse.left_pressed || mouse.left_down) {
        state.paint(mouse.x, mouse.y, mouse.left_pressed, now_s);
    }
    if mouse.left_released {
        state.end_paint();
    }

    action
}

fn draw_save_dialog(
    state: &mut EditorState,
    store: &mut MapStore,
    ui: &mut UiContext,
    now_s: f64,
) {
    ui::darken_screen();

    let panel = Rect::new(120.0, 120.0, 360.0, 140.0);
    draw_rectangle(panel.x, panel.y, panel.w, panel.h, theme::BG_COLOR);
    draw_rectangle_lines(panel.x, panel.y, panel.w, panel.h, 1.0, theme::ACCENT_COLOR);

    let title = panel.slice_top(36.0);
    ui::draw_text_centered("Map Name", &title, theme::FONT_SIZE_HEADER, theme::TEXT_COLOR);

    if let Some(input) = state.save_name.as_mut() {
        ui::draw_text_input(
            Rect::new(140.0, 164.0, 320.0, 32.0),
            input,
            theme::FONT_SIZE_CONTENT,
        );
    }

    let save = Rect::new(200.0, 214.0, 90.0, 32.0);
    let cancel = Rect::new(310.0, 214.0, 90.0, 32.0);
    if ui::text_button(ui, save, "Save") || is_key_pressed(KeyCode::Enter) {
        state.save(store, now_s);
    }
    if ui::text_button(ui, cancel, "Cancel") || is_key_pressed(KeyCode::Escape) {
        state.close_save_dialog();
    }
}
