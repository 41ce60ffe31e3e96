//! Drawing a running session: world, entities, HUD and overlays
//!
//! This is a read-only pass over the session. The only mutable piece is the
//! [`UiContext`] the end-of-run buttons report their clicks through; the
//! caller turns the returned [`SessionAction`] into a screen switch.

use macroquad::prelude::*;

use super::entity::Entity;
use super::session::Session;
use super::VIEW_WIDTH;
use crate::asset::{GameAssets, TextureBook};
use crate::ui::{self, theme, Rect, UiContext};
use crate::world::{TileKind, TileMap, BACKGROUND_WIDTH, MAP_ROWS, TILE_SIZE};

/// What the player clicked on the end-of-run overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    None,
    PlayAgain,
    MainMenu,
}

/// Draw one frame of a session and return whatever overlay button was
/// clicked. Enemies go down first so the player reads on top of them.
pub fn draw_session(session: &Session, assets: &GameAssets, ui: &mut UiContext) -> SessionAction {
    let offset = session.offset_x();

    draw_background(&assets.textures, offset, session.map().width());
    draw_tiles(session.map(), offset, &assets.textures);

    for enemy in session.enemies() {
        draw_entity(enemy, offset, &assets.textures);
        draw_healthbar(enemy, offset);
    }
    draw_entity(session.player(), offset, &assets.textures);
    draw_healthbar(session.player(), offset);

    draw_score(session.score());

    if session.is_over() {
        return draw_end_overlay(session, ui);
    }
    if session.paused() {
        draw_pause_overlay();
    }
    SessionAction::None
}

/// Tile the background image across the map width, shifted by the camera.
pub fn draw_background(textures: &TextureBook, offset_x: f32, spans: u32) {
    for i in 0..spans {
        let x = i as f32 * BACKGROUND_WIDTH - offset_x;
        if x > VIEW_WIDTH || x + BACKGROUND_WIDTH < 0.0 {
            continue;
        }
        draw_texture(textures.background(), x, 0.0, WHITE);
    }
}

/// Draw every tile in the columns that intersect the view. Also used by the
/// editor, which is why spawn markers get a sprite here; in a running
/// session they have already been consumed.
pub fn draw_tiles(map: &TileMap, offset_x: f32, textures: &TextureBook) {
    let (first, last) = visible_columns(offset_x, map.cols());

    for col in first..last {
        for row in 0..MAP_ROWS {
            let Some(tile) = map.tile_at(col, row) else {
                continue;
            };
            let x = col as f32 * TILE_SIZE - offset_x;
            let y = row as f32 * TILE_SIZE;
            match tile.kind {
                TileKind::Empty => {}
                TileKind::Solid => draw_texture(textures.tile(tile.variant), x, y, WHITE),
                TileKind::EnemySpawn => draw_texture(textures.spawn_marker(), x, y, WHITE),
                kind => {
                    if let Some(index) = kind.portal_index() {
                        draw_texture(textures.portal(index), x, y, WHITE);
                    }
                }
            }
        }
    }
}

/// Half-open range of map columns overlapping the view
fn visible_columns(offset_x: f32, cols: usize) -> (usize, usize) {
    let first = (offset_x / TILE_SIZE).floor().max(0.0) as usize;
    let last = (((offset_x + VIEW_WIDTH) / TILE_SIZE).ceil().max(0.0) as usize).min(cols);
    (first.min(last), last)
}

fn draw_entity(entity: &Entity, offset_x: f32, textures: &TextureBook) {
    let x = entity.x - offset_x;
    if x > VIEW_WIDTH || x + entity.kind.sprite_w < 0.0 {
        return;
    }
    let texture = textures
        .sprite(entity.kind.class)
        .frame(entity.state(), entity.facing(), entity.frame());
    draw_texture(texture, x, entity.y - entity.kind.sprite_h, WHITE);
}

/// Fraction of the healthbar to fill. Zero max health reads as empty rather
/// than dividing by zero.
pub fn health_fill_fraction(health: i32, max_health: i32) -> f32 {
    if max_health <= 0 {
        return 0.0;
    }
    (health as f32 / max_health as f32).clamp(0.0, 1.0)
}

/// 80x4 bar whose bottom sits 4px below the sprite top, with the remaining
/// health as a number right above it.
fn draw_healthbar(entity: &Entity, offset_x: f32) {
    let bar = Rect::new(
        entity.center_x() - offset_x - HEALTHBAR_W / 2.0,
        entity.y - entity.kind.sprite_h + 4.0 - HEALTHBAR_H,
        HEALTHBAR_W,
        HEALTHBAR_H,
    );
    let fill = health_fill_fraction(entity.health(), entity.kind.max_health);

    draw_rectangle(bar.x, bar.y, bar.w, bar.h, theme::HEALTH_BG);
    draw_rectangle(bar.x, bar.y, bar.w * fill, bar.h, theme::HEALTH_FILL);

    let label = entity.health().max(0).to_string();
    let text_strip = Rect::new(bar.x, bar.y - 14.0, bar.w, 14.0);
    ui::draw_text_centered(&label, &text_strip, theme::FONT_SIZE_SMALL, BLACK);
}

const HEALTHBAR_W: f32 = 80.0;
const HEALTHBAR_H: f32 = 4.0;

/// Score counter in the top right corner, black on a white chip
fn draw_score(score: u32) {
    let text = format!("Score: {score}");
    let size = theme::FONT_SIZE_CONTENT;
    let dims = measure_text(&text, None, size as u16, 1.0);
    let x = VIEW_WIDTH - 10.0 - dims.width;
    let y = 10.0;
    draw_rectangle(x - 2.0, y, dims.width + 4.0, size, WHITE);
    draw_text(&text, x, y + size - 4.0, size, BLACK);
}

fn draw_pause_overlay() {
    ui::darken_screen();
    let screen = Rect::screen(screen_width(), screen_height());
    ui::draw_text_centered("Paused", &screen, theme::FONT_SIZE_TITLE, theme::TEXT_COLOR);
}

/// Outcome title, run stats and the two navigation buttons, laid out down
/// the vertical center of the view.
fn draw_end_overlay(session: &Session, ui: &mut UiContext) -> SessionAction {
    ui::darken_screen();

    let title = if session.won() { "Level Clear!" } else { "Game Over" };
    let centerx = VIEW_WIDTH / 2.0;

    let title_rect = Rect::new(0.0, 90.0, VIEW_WIDTH, 50.0);
    ui::draw_text_centered(title, &title_rect, theme::FONT_SIZE_TITLE, theme::TEXT_COLOR);

    let stats = [
        format!("Score: {}", session.score()),
        format!("Time: {}s", session.elapsed_secs()),
        format!("High Score: {}", session.high_score()),
    ];
    for (i, line) in stats.iter().enumerate() {
        let line_rect = Rect::new(0.0, 158.0 + i as f32 * 24.0, VIEW_WIDTH, 24.0);
        ui::draw_text_centered(line, &line_rect, theme::FONT_SIZE_HEADER, theme::TEXT_COLOR);
    }

    let play_again = Rect::new(centerx - 90.0, 240.0, 180.0, 40.0);
    if ui::text_button(ui, play_again, "Play Again") {
        return SessionAction::PlayAgain;
    }
    let main_menu = Rect::new(centerx - 90.0, 310.0, 180.0, 40.0);
    if ui::text_button(ui, main_menu, "Main Menu") {
        return SessionAction::MainMenu;
    }
    SessionAction::None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_fraction_zero_max_is_empty() {
        assert_eq!(health_fill_fraction(3, 0), 0.0);
        assert_eq!(health_fill_fraction(0, -1), 0.0);
    }

    #[test]
    fn test_health_fraction_clamps_negative_health() {
        assert_eq!(health_fill_fraction(-2, 3), 0.0);
    }

    #[test]
    fn test_health_fraction_partial_and_full() {
        assert_eq!(health_fill_fraction(3, 3), 1.0);
        assert!((health_fill_fraction(1, 4) - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_visible_columns_clamps_to_map() {
        // 10-column map, view wider than the map: everything is visible
        assert_eq!(visible_columns(0.0, 10), (0, 10));
    }

    #[test]
    fn test_visible_columns_scrolled() {
        // Offset 100 on a wide map: column 3 is the first to intersect,
        // column 21 holds the pixel at the right edge.
        assert_eq!(visible_columns(100.0, 40), (3, 22));
    }
}
