//! Camera system for 2D visualization

use glam::{DVec2, Vec2};

/// Axis-aligned view onto the y-up world
///
/// `offset` is the world position shown at the bottom-left corner of the
/// viewport. Screen space is y-down with its origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2d {
    pub offset: DVec2,
    pub viewport: Vec2,
}

impl Camera2d {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            offset: DVec2::ZERO,
            viewport: Vec2::new(width, height),
        }
    }

    pub fn move_to(&mut self, offset: DVec2) {
        self.offset = offset;
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    pub fn world_to_screen(&self, world: DVec2) -> Vec2 {
        let local = (world - self.offset).as_vec2();
        Vec2::new(local.x, self.viewport.y - local.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_maps_to_bottom_left() {
        let camera = Camera2d::new(1000.0, 700.0);

        assert_eq!(camera.world_to_screen(DVec2::ZERO), Vec2::new(0.0, 700.0));
        assert_eq!(
            camera.world_to_screen(DVec2::new(1000.0, 700.0)),
            Vec2::new(1000.0, 0.0)
        );
    }

    #[test]
    fn test_focal_point_lands_in_center() {
        let mut camera = Camera2d::new(1000.0, 700.0);
        let focal = DVec2::new(123.0, -40.0);
        camera.move_to(focal - DVec2::new(500.0, 350.0));

        assert_eq!(camera.world_to_screen(focal), Vec2::new(500.0, 350.0));
    }

    #[test]
    fn test_resize() {
        let mut camera = Camera2d::new(1000.0, 700.0);
        camera.resize(800.0, 600.0);

        assert_eq!(camera.world_to_screen(DVec2::ZERO), Vec2::new(0.0, 600.0));
    }
}
