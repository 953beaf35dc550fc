//! Camera focal point selection

use glam::DVec2;
use orrery_physics::Body;

/// What the camera centers on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusMode {
    /// The first body tagged as the sun
    #[default]
    Sun,
    /// Arithmetic mean of all body positions
    Centroid,
}

/// Point the camera should center on, if there is one
pub fn focal_point(bodies: &[Body], mode: FocusMode) -> Option<DVec2> {
    match mode {
        FocusMode::Sun => bodies.iter().find(|b| b.is_sun).map(|b| b.position),
        FocusMode::Centroid => {
            if bodies.is_empty() {
                return None;
            }
            let sum = bodies
                .iter()
                .fold(DVec2::ZERO, |acc, b| acc + b.position);
            Some(sum / bodies.len() as f64)
        }
    }
}

/// Bottom-left corner of a viewport centered on `focal`
pub fn camera_offset(focal: DVec2, viewport: DVec2) -> DVec2 {
    focal - viewport / 2.0
}
