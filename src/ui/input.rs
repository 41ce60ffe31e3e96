//! Input state for UI interaction

use super::Rect;

/// Mouse button state
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    pub left_pressed: bool,  // Just pressed this frame
    pub left_released: bool, // Just released this frame
    pub scroll: f32,         // Scroll wheel delta
}

impl MouseState {
    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if mouse just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }
}

/// UI context passed through the frame
pub struct UiContext {
    pub mouse: MouseState,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            mouse: MouseState::default(),
        }
    }

    /// Reset at start of frame (call before UI code)
    pub fn begin_frame(&mut self, mouse: MouseState) {
        self.mouse = mouse;
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clicked_requires_press_inside() {
        let rect = Rect::new(10.0, 10.0, 50.0, 20.0);
        let mut mouse = MouseState {
            x: 20.0,
            y: 15.0,
            left_pressed: true,
            ..Default::default()
        };
        assert!(mouse.clicked(&rect));
        mouse.left_pressed = false;
        assert!(!mouse.clicked(&rect));
        mouse.left_pressed = true;
        mouse.x = 100.0;
        assert!(!mouse.clicked(&rect));
    }
}
