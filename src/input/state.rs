//! Input state management
//!
//! Polls keyboard, mouse and gamepad (gamepads crate) once per frame
//! and condenses them into a [`FrameInput`] snapshot the simulation
//! consumes. Movement uses an additive intent accumulator fed by
//! press/release edges, so holding both direction keys cancels to zero
//! instead of favoring one side.

use gamepads::{Button, Gamepads};
use macroquad::prelude::*;

use super::Action;

/// Everything the game wants to know about input for one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Net move request: negative left, positive right
    pub move_intent: i32,
    pub jump_pressed: bool,
    pub attack_pressed: bool,
    pub pause_pressed: bool,
    pub mute_pressed: bool,
}

pub struct InputState {
    gamepads: Gamepads,
    /// Keyboard move accumulator: +1 per held right key, -1 per held left
    move_intent: i32,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            gamepads: Gamepads::new(),
            move_intent: 0,
        }
    }

    /// Call once per frame. Advances the accumulator by this frame's
    /// key edges and snapshots the trigger actions.
    pub fn poll(&mut self) -> FrameInput {
        self.gamepads.poll();

        if is_key_pressed(KeyCode::D) {
            self.move_intent += 1;
        }
        if is_key_released(KeyCode::D) {
            self.move_intent -= 1;
        }
        if is_key_pressed(KeyCode::A) {
            self.move_intent -= 1;
        }
        if is_key_released(KeyCode::A) {
            self.move_intent += 1;
        }

        FrameInput {
            move_intent: self.move_intent + self.gamepad_move(),
            jump_pressed: self.action_pressed(Action::Jump),
            attack_pressed: self.action_pressed(Action::Attack),
            pause_pressed: self.action_pressed(Action::Pause),
            mute_pressed: self.action_pressed(Action::Mute),
        }
    }

    /// Held gamepad direction, d-pad or left stick
    fn gamepad_move(&self) -> i32 {
        let Some(gp) = self.gamepads.all().next() else {
            return 0;
        };
        let mut intent = 0;
        if gp.is_currently_pressed(Button::DPadLeft) || gp.left_stick().0 < -0.5 {
            intent -= 1;
        }
        if gp.is_currently_pressed(Button::DPadRight) || gp.left_stick().0 > 0.5 {
            intent += 1;
        }
        intent
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        self.keyboard_pressed(action) || self.gamepad_pressed(action)
    }

    fn keyboard_pressed(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => is_key_pressed(KeyCode::A),
            Action::MoveRight => is_key_pressed(KeyCode::D),
            Action::Jump => is_key_pressed(KeyCode::W) || is_key_pressed(KeyCode::Space),
            Action::Attack => is_mouse_button_pressed(MouseButton::Left),
            Action::Pause => is_key_pressed(KeyCode::P) || is_key_pressed(KeyCode::Escape),
            Action::Mute => is_key_pressed(KeyCode::M),
        }
    }

    fn gamepad_pressed(&self, action: Action) -> bool {
        let Some(gp) = self.gamepads.all().next() else {
            return false;
        };
        match action {
            Action::MoveLeft => gp.is_just_pressed(Button::DPadLeft),
            Action::MoveRight => gp.is_just_pressed(Button::DPadRight),
            Action::Jump => gp.is_just_pressed(Button::ActionDown),
            Action::Attack => gp.is_just_pressed(Button::ActionLeft),
            Action::Pause => gp.is_just_pressed(Button::RightCenterCluster),
            Action::Mute => false,
        }
    }

    /// Check if any gamepad is connected
    pub fn has_gamepad(&self) -> bool {
        self.gamepads.all().next().is_some()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
