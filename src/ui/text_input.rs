//! Text input widget with cursor and keyboard handling
//!
//! Used by the editor's save dialog for map names. Single line, capped
//! length, no selection support.

use super::Rect;
use macroquad::prelude::*;

/// State for a text input field
#[derive(Debug, Clone)]
pub struct TextInputState {
    /// The text content
    pub text: String,
    /// Cursor position (byte index)
    pub cursor: usize,
    /// Maximum number of characters accepted
    pub max_len: usize,
    /// Blink timer for cursor
    pub blink_timer: f32,
    /// Whether the input has focus
    pub focused: bool,
}

impl TextInputState {
    pub fn new(text: impl Into<String>, max_len: usize) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self {
            text,
            cursor,
            max_len,
            blink_timer: 0.0,
            focused: true,
        }
    }

    /// Move cursor left one character
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            // Move back one character (handle UTF-8)
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor = prev;
        }
    }

    /// Move cursor right one character
    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            // Move forward one character (handle UTF-8)
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.cursor = next;
        }
    }

    /// Move cursor to start
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Insert a character at cursor, respecting the length cap
    pub fn insert_char(&mut self, ch: char) {
        if self.text.chars().count() >= self.max_len {
            return;
        }
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Delete character before cursor (backspace)
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            // Find previous character boundary
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    /// Delete character after cursor (delete key)
    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            // Find next character boundary
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    /// Handle keyboard input, returns true if text changed
    pub fn handle_input(&mut self) -> bool {
        let old_text = self.text.clone();
        self.blink_timer += get_frame_time();

        // Navigation
        if is_key_pressed(KeyCode::Left) {
            self.move_left();
            self.blink_timer = 0.0;
        }
        if is_key_pressed(KeyCode::Right) {
            self.move_right();
            self.blink_timer = 0.0;
        }
        if is_key_pressed(KeyCode::Home) {
            self.move_home();
            self.blink_timer = 0.0;
        }
        if is_key_pressed(KeyCode::End) {
            self.move_end();
            self.blink_timer = 0.0;
        }

        // Deletion
        if is_key_pressed(KeyCode::Backspace) {
            self.backspace();
            self.blink_timer = 0.0;
        }
        if is_key_pressed(KeyCode::Delete) {
            self.delete();
            self.blink_timer = 0.0;
        }

        // Character input
        while let Some(ch) = get_char_pressed() {
            // Filter control characters
            if ch >= ' ' && ch != '\u{7f}' {
                self.insert_char(ch);
                self.blink_timer = 0.0;
            }
        }

        self.text != old_text
    }
}

/// Colors for text input
const INPUT_BG: Color = Color::new(0.12, 0.12, 0.14, 1.0);
const INPUT_BORDER: Color = Color::new(0.95, 0.75, 0.3, 1.0);
const INPUT_TEXT: Color = Color::new(0.8, 0.8, 0.85, 1.0);
const INPUT_CURSOR: Color = Color::new(0.9, 0.9, 0.95, 1.0);

/// Draw a text input field and handle input
/// Returns true if the text changed
pub fn draw_text_input(rect: Rect, state: &mut TextInputState, font_size: f32) -> bool {
    // Draw background
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, INPUT_BG);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, INPUT_BORDER);

    let padding = 8.0;
    let text_x = rect.x + padding;
    let text_y = rect.y + (rect.h + font_size * 0.7) / 2.0;

    // Handle input
    let changed = state.handle_input();

    // Measure text up to cursor for cursor positioning
    let text_before_cursor = &state.text[..state.cursor];
    let cursor_offset = measure_text(text_before_cursor, None, font_size as u16, 1.0).width;

    // Draw text
    draw_text(&state.text, text_x, text_y, font_size, INPUT_TEXT);

    // Draw cursor (blinking)
    if state.focused && (state.blink_timer % 1.0) < 0.5 {
        let cursor_x = text_x + cursor_offset;
        draw_line(
            cursor_x,
            rect.y + 6.0,
            cursor_x,
            rect.y + rect.h - 6.0,
            1.5,
            INPUT_CURSOR,
        );
    }

    changed
}
