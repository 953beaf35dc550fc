//! Simulation parameters for runtime tuning

use crate::focus::FocusMode;
use glam::DVec2;
use orrery_physics::{GravityModel, DEFAULT_TRAIL_LENGTH, G};

/// Viewport width in world units (and logical pixels)
pub const SCREEN_WIDTH: f64 = 1000.0;

/// Viewport height in world units (and logical pixels)
pub const SCREEN_HEIGHT: f64 = 700.0;

/// Target tick rate of the host scheduler
pub const TICK_RATE: f64 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParams {
    /// Gravitational constant
    pub gravity: f64,
    pub model: GravityModel,
    /// Points kept per body trail
    pub trail_capacity: usize,
    pub focus: FocusMode,
    /// Visible area, used to turn the focal point into a camera offset
    pub viewport: DVec2,
    /// Seed for randomized scenarios; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            gravity: G,
            model: GravityModel::MassWeighted,
            trail_capacity: DEFAULT_TRAIL_LENGTH,
            focus: FocusMode::Sun,
            viewport: DVec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            seed: None,
        }
    }
}

impl SimulationParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
