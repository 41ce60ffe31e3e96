//! Gatecrash: a side-scrolling action platformer with a built-in map editor
//!
//! - Fixed 600x400 view over a 32px tile grid
//! - Simulation stepped at 30 ticks per second
//! - Procedurally generated sprites, tiles and backdrop
//! - Maps persisted to a local JSON store

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod world;
mod game;
mod asset;
mod input;
mod ui;
mod editor;
mod landing;
mod app;

use macroquad::prelude::*;

use app::{AppState, Screen};
use asset::GameAssets;
use editor::{draw_editor, draw_map_browser, BrowserAction, EditorAction};
use game::{draw_session, SessionAction};
use landing::{draw_difficulty_menu, draw_main_menu, DifficultyAction, MenuAction};
use ui::{theme, MouseState, UiContext};
use world::MapStore;

/// Where the map store lives on disk (relative to the working directory)
const MAPS_PATH: &str = "maps.json";

/// The simulation is frame-locked: one update per rendered frame, frames
/// paced to this rate
const TARGET_FRAME_TIME: f64 = 1.0 / game::TICK_RATE as f64;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Gatecrash v{}", VERSION),
        window_width: game::VIEW_WIDTH as i32,
        window_height: game::VIEW_HEIGHT as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let store = match MapStore::load(MAPS_PATH) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to read map store {MAPS_PATH}: {e}, starting fresh");
            MapStore::with_defaults(MAPS_PATH)
        }
    };

    let mut assets = match GameAssets::load().await {
        Ok(assets) => assets,
        Err(e) => {
            eprintln!("Asset generation failed: {e}");
            return;
        }
    };

    let mut app = AppState::new(store);
    let mut ui_ctx = UiContext::new();

    println!("=== Gatecrash v{VERSION} ===");

    loop {
        // Track frame start time for pacing
        let frame_start = get_time();

        let frame_input = app.input.poll();
        if frame_input.mute_pressed {
            assets.sounds.toggle_mute();
        }

        let mouse_pos = mouse_position();
        let mouse_state = MouseState {
            x: mouse_pos.0,
            y: mouse_pos.1,
            left_down: is_mouse_button_down(MouseButton::Left),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            left_released: is_mouse_button_released(MouseButton::Left),
            scroll: mouse_wheel().1,
        };
        ui_ctx.begin_frame(mouse_state);

        clear_background(theme::BG_COLOR);

        match app.screen {
            Screen::MainMenu => {
                match draw_main_menu(&mut ui_ctx, app.input.has_gamepad()) {
                    MenuAction::Play => app.screen = Screen::MapSelect,
                    MenuAction::Difficulty => app.screen = Screen::DifficultySelect,
                    MenuAction::Editor => app.screen = Screen::Editor,
                    MenuAction::None => {}
                }
            }
            Screen::DifficultySelect => {
                match draw_difficulty_menu(&mut ui_ctx, app.difficulty) {
                    DifficultyAction::Chosen(difficulty) => {
                        app.difficulty = difficulty;
                        app.screen = Screen::MainMenu;
                    }
                    DifficultyAction::None => {}
                }
            }
            Screen::MapSelect => match draw_map_browser(&app.store, &mut ui_ctx) {
                BrowserAction::Play(index) => app.start_session(index),
                BrowserAction::Back => app.screen = Screen::MainMenu,
                BrowserAction::None => {}
            },
            Screen::Editor => {
                match draw_editor(
                    &mut app.editor,
                    &mut app.store,
                    &assets,
                    &mut ui_ctx,
                    get_time(),
                ) {
                    EditorAction::Back => app.screen = Screen::MainMenu,
                    EditorAction::None => {}
                }
            }
            Screen::Game => {
                if let Some(session) = app.session.as_mut() {
                    session.update(&frame_input, get_time() * 1000.0, &assets.masks);
                    for event in session.drain_sounds() {
                        assets.sounds.play(event);
                    }
                }
                let action = match app.session.as_ref() {
                    Some(session) => draw_session(session, &assets, &mut ui_ctx),
                    None => SessionAction::MainMenu,
                };
                match action {
                    SessionAction::PlayAgain => app.restart_session(),
                    SessionAction::MainMenu => app.end_session(),
                    SessionAction::None => {}
                }
            }
        }

        // Music runs while a session is live, stops on the end screen
        let music_wanted = matches!(app.screen, Screen::Game)
            && app.session.as_ref().is_some_and(|s| !s.is_over());
        assets.sounds.set_music(music_wanted);

        // Frame pacing keeps the frame-locked simulation at its fixed rate
        let elapsed = get_time() - frame_start;
        let remaining = TARGET_FRAME_TIME - elapsed;
        if remaining > 0.0 {
            // Native: use sleep for bulk, then spin-wait for precision
            #[cfg(not(target_arch = "wasm32"))]
            {
                let spin_margin = 0.002; // 2ms
                while get_time() - frame_start + spin_margin < TARGET_FRAME_TIME {
                    std::thread::sleep(std::time::Duration::from_millis(1));
                }
                while get_time() - frame_start < TARGET_FRAME_TIME {
                    std::hint::spin_loop();
                }
            }
            // WASM: just spin-wait (no thread::sleep available)
            #[cfg(target_arch = "wasm32")]
            {
                while get_time() - frame_start < TARGET_FRAME_TIME {
                    // Busy wait - browser will handle frame pacing
                }
            }
        }

        next_frame().await;
    }
}
