//! Fixed-step semi-implicit Euler integration

use crate::body::Body;
use crate::forces::{acceleration_on, GravityModel};

/// Advance every body by `dt`.
///
/// Bodies are updated in place, in order: body `i` feels bodies `0..i` at
/// their already-advanced positions and the rest where they started.
/// Momentum is therefore not exactly conserved.
/// A non-finite or non-positive `dt` leaves the bodies untouched.
pub fn step(bodies: &mut [Body], model: GravityModel, g: f64, dt: f64) {
    if !dt.is_finite() || dt <= 0.0 {
        return;
    }

    for i in 0..bodies.len() {
        let a = acceleration_on(bodies, i, model, g);
        bodies[i].integrate(a, dt);
    }
}
