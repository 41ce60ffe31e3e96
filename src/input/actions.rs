//! Game action definitions
//!
//! Keyboard is the primary device (A/D move, W jumps, left mouse
//! attacks); a connected gamepad mirrors the same actions.

/// All actions the game reacts to, independent of the device that
/// triggered them
///
/// Gamepad mapping:
/// - D-pad / left stick = Move
/// - A = Jump
/// - X = Attack
/// - Start = Pause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Attack,
    Pause,
    Mute,
}
