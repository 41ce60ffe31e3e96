//! Basic UI widgets
//!
//! Text buttons shared by the menus, map browser, editor toolbar and the
//! end-of-run overlays. Buttons report clicks through their return value.

use super::{Rect, UiContext};
use crate::ui::theme;
use macroquad::prelude::*;

/// Draw text horizontally and vertically centered in a rect
pub fn draw_text_centered(text: &str, rect: &Rect, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    let tx = rect.x + (rect.w - dims.width) / 2.0;
    let ty = rect.y + (rect.h + dims.height) / 2.0 - 2.0;
    draw_text(text, tx, ty, font_size, color);
}

/// Draw a text button, returns true if clicked
pub fn text_button(ctx: &mut UiContext, rect: Rect, text: &str) -> bool {
    text_button_enabled(ctx, rect, text, theme::BUTTON_BG, true)
}

/// Draw a text button that highlights when selected (brush palette, difficulty picker)
pub fn toggle_button(ctx: &mut UiContext, rect: Rect, text: &str, selected: bool) -> bool {
    let bg = if selected {
        theme::BUTTON_SELECTED
    } else {
        theme::BUTTON_BG
    };
    text_button_enabled(ctx, rect, text, bg, true)
}

/// Draw a text button with enabled state
pub fn text_button_enabled(
    ctx: &mut UiContext,
    rect: Rect,
    text: &str,
    bg_color: Color,
    enabled: bool,
) -> bool {
    let hovered = enabled && ctx.mouse.inside(&rect);
    let clicked = hovered && ctx.mouse.left_pressed;

    let color = if !enabled {
        theme::BUTTON_DISABLED
    } else if hovered {
        Color::new(
            bg_color.r * 1.2,
            bg_color.g * 1.2,
            bg_color.b * 1.2,
            bg_color.a,
        )
    } else {
        bg_color
    };

    draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);

    let text_color = if enabled {
        WHITE
    } else {
        theme::BUTTON_TEXT_DISABLED
    };
    draw_text_centered(text, &rect, theme::FONT_SIZE_CONTENT, text_color);

    clicked
}

/// Draw text vertically centered at the left edge of a rect
pub fn draw_text_left(text: &str, rect: &Rect, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    let ty = rect.y + (rect.h + dims.height) / 2.0 - 2.0;
    draw_text(text, rect.x, ty, font_size, color);
}

/// Flat filled panel
pub fn draw_panel(rect: &Rect, color: Color) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
}

/// Darken the whole screen behind a modal dialog
pub fn darken_screen() {
    draw_rectangle(
        0.0,
        0.0,
        screen_width(),
        screen_height(),
        Color::from_rgba(0, 0, 0, 180),
    );
}
