//! Main menu and difficulty screens
//!
//! Plain button pages. Clicks come back as action enums; the app decides
//! what screen follows.

use crate::game::Difficulty;
use crate::ui::{self, theme, Rect, UiContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    Play,
    Difficulty,
    Editor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyAction {
    None,
    Chosen(Difficulty),
}

const BUTTON_W: f32 = 180.0;
const BUTTON_H: f32 = 44.0;

fn centered_button(y: f32) -> Rect {
    Rect::new(300.0 - BUTTON_W / 2.0, y, BUTTON_W, BUTTON_H)
}

pub fn draw_main_menu(ui: &mut UiContext, gamepad_connected: bool) -> MenuAction {
    let play = centered_button(70.0);
    let difficulty = centered_button(play.bottom() + 30.0);
    let editor = centered_button(difficulty.bottom() + 15.0);

    let mut action = MenuAction::None;
    if ui::text_button(ui, play, "Play") {
        action = MenuAction::Play;
    }
    if ui::text_button(ui, difficulty, "Difficulty") {
        action = MenuAction::Difficulty;
    }
    if ui::text_button(ui, editor, "Map Editor") {
        action = MenuAction::Editor;
    }

    let reminder = Rect::new(0.0, 352.0, 600.0, 18.0);
    ui::draw_text_centered(
        "Turn on sound for the best experience!",
        &reminder,
        theme::FONT_SIZE_CONTENT,
        theme::TEXT_DIM,
    );
    if gamepad_connected {
        let hint = Rect::new(0.0, 374.0, 600.0, 14.0);
        ui::draw_text_centered(
            "Gamepad connected",
            &hint,
            theme::FONT_SIZE_SMALL,
            theme::TEXT_DIM,
        );
    }

    action
}

pub fn draw_difficulty_menu(ui: &mut UiContext, current: Difficulty) -> DifficultyAction {
    let header = Rect::new(0.0, 20.0, 600.0, 30.0);
    ui::draw_text_centered(
        &format!("Current Difficulty: {}", current.label()),
        &header,
        theme::FONT_SIZE_HEADER,
        theme::TEXT_COLOR,
    );

    let mut y = 70.0;
    for difficulty in Difficulty::ALL {
        let rect = centered_button(y);
        if ui::toggle_button(ui, rect, difficulty.label(), difficulty == current) {
            return DifficultyAction::Chosen(difficulty);
        }
        y += BUTTON_H + 10.0;
    }

    DifficultyAction::None
}
