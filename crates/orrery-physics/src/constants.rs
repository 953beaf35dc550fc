//! Physical constants for the orrery
//!
//! Values are in arbitrary simulation units tuned for a 1000x700 viewport
//! ticking at roughly 60 Hz.

/// Gravitational constant
pub const G: f64 = 9.8;

/// Trail capacity for the solar system
pub const SOLAR_TRAIL_LENGTH: usize = 50;

/// Trail capacity for the three-body system
pub const THREE_BODY_TRAIL_LENGTH: usize = 100;

/// Trail capacity used when none is given
pub const DEFAULT_TRAIL_LENGTH: usize = SOLAR_TRAIL_LENGTH;
