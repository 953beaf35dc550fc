//! Body type and properties for the orrery

use crate::constants::DEFAULT_TRAIL_LENGTH;
use crate::trail::Trail;
use glam::DVec2;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A simulated disc
///
/// Mass and radius are fixed at construction. Position, velocity and the
/// trail evolve every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Display name, if the scenario gives one
    pub name: Option<&'static str>,
    pub position: DVec2,
    pub velocity: DVec2,
    /// Fill color for the disc and its trail
    pub color: Color,
    /// Marks the body the camera follows in sun-focused scenarios
    pub is_sun: bool,
    radius: f64,
    mass: f64,
    pub(crate) trail: Trail,
}

impl Body {
    /// Create a body with an empty trail of the default capacity
    pub fn new(position: DVec2, velocity: DVec2, mass: f64, radius: f64) -> Self {
        debug_assert!(mass > 0.0, "body mass must be strictly positive");
        Self {
            name: None,
            position,
            velocity,
            color: Color::WHITE,
            is_sun: false,
            radius,
            mass,
            trail: Trail::new(DEFAULT_TRAIL_LENGTH),
        }
    }

    pub fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_trail_capacity(mut self, capacity: usize) -> Self {
        self.trail = Trail::new(capacity);
        self
    }

    pub fn as_sun(mut self) -> Self {
        self.is_sun = true;
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Semi-implicit Euler step: velocity first, then position with the new
    /// velocity. The new position is recorded in the trail.
    pub fn integrate(&mut self, acceleration: DVec2, dt: f64) {
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
        self.trail.push(self.position);
    }
}
