//! Horizontal scrolling camera

use super::VIEW_WIDTH;

/// Follows the player's body center and clamps to the map, so the view
/// never shows past either end.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    offset_x: f32,
}

impl Camera {
    pub fn new(player_center_x: f32, map_pixel_width: f32) -> Self {
        let mut camera = Self { offset_x: 0.0 };
        camera.update(player_center_x, map_pixel_width);
        camera
    }

    /// World x of the left edge of the view
    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    pub fn update(&mut self, player_center_x: f32, map_pixel_width: f32) {
        let max_offset = (map_pixel_width - VIEW_WIDTH).max(0.0);
        let desired = player_center_x - VIEW_WIDTH / 2.0;
        self.offset_x = desired.clamp(0.0, max_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_to_map_edges() {
        let mut camera = Camera::new(0.0, 1000.0);
        assert_eq!(camera.offset_x(), 0.0);

        camera.update(1000.0, 1000.0);
        assert_eq!(camera.offset_x(), 400.0);
    }

    #[test]
    fn test_centers_on_player_between_edges() {
        let camera = Camera::new(500.0, 1280.0);
        assert_eq!(camera.offset_x(), 200.0);
    }

    #[test]
    fn test_map_narrower_than_view_pins_left() {
        let camera = Camera::new(150.0, 300.0);
        assert_eq!(camera.offset_x(), 0.0);
    }
}
