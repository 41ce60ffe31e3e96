//! UI Theme - Shared colors and styling constants
//!
//! Centralized color definitions for consistent look across menus, the
//! in-game HUD and the level editor.

use macroquad::prelude::Color;

// =============================================================================
// Base UI Colors
// =============================================================================

/// Dark background color
pub const BG_COLOR: Color = Color::new(0.11, 0.11, 0.13, 1.0);

/// Header/toolbar background
pub const HEADER_COLOR: Color = Color::new(0.15, 0.15, 0.18, 1.0);

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.8, 0.8, 0.85, 1.0);

/// Dimmed/secondary text
pub const TEXT_DIM: Color = Color::new(0.4, 0.4, 0.45, 1.0);

/// Accent color for titles and highlights
pub const ACCENT_COLOR: Color = Color::new(0.95, 0.75, 0.3, 1.0);

// =============================================================================
// Font Sizes
// =============================================================================

/// Large title text size
pub const FONT_SIZE_TITLE: f32 = 32.0;

/// Header/section text size
pub const FONT_SIZE_HEADER: f32 = 20.0;

/// Standard content text size
pub const FONT_SIZE_CONTENT: f32 = 16.0;

/// Small/detail text size
pub const FONT_SIZE_SMALL: f32 = 12.0;

// =============================================================================
// Button Colors
// =============================================================================

/// Button fill
pub const BUTTON_BG: Color = Color::new(0.22, 0.22, 0.28, 1.0);

/// Button fill when disabled
pub const BUTTON_DISABLED: Color = Color::new(0.196, 0.196, 0.216, 1.0); // ~50, 50, 55

/// Button label when disabled
pub const BUTTON_TEXT_DISABLED: Color = Color::new(0.392, 0.392, 0.392, 1.0); // ~100, 100, 100

/// Button fill when selected (active brush, chosen difficulty)
pub const BUTTON_SELECTED: Color = Color::new(0.25, 0.4, 0.55, 1.0);

// =============================================================================
// List Rows (map browser)
// =============================================================================

/// Row background
pub const ITEM_BG: Color = Color::new(0.13, 0.13, 0.15, 1.0);

// =============================================================================
// In-game HUD
// =============================================================================

/// Health bar backing
pub const HEALTH_BG: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Health bar fill
pub const HEALTH_FILL: Color = Color::new(0.0, 0.8, 0.0, 1.0);
