//! Pairwise Newtonian gravity
//!
//! Two models share the same inverse-square force but differ in what acts as
//! mass and in how force turns into acceleration:
//!
//! - [`GravityModel::MassWeighted`]: mass is the mass proxy, acceleration is
//!   `F / m_target` (solar system).
//! - [`GravityModel::RadiusProxy`]: radius is the mass proxy, the force term is
//!   used as the acceleration directly (three-body).

use crate::body::Body;
use glam::DVec2;

/// How a body's mass proxy is chosen and how force becomes acceleration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GravityModel {
    /// `p = mass`, `a = F / mass`
    #[default]
    MassWeighted,
    /// `p = radius`, `a = F`
    RadiusProxy,
}

impl GravityModel {
    /// Quantity standing in for mass in the force law
    pub fn mass_proxy(self, body: &Body) -> f64 {
        match self {
            GravityModel::MassWeighted => body.mass(),
            GravityModel::RadiusProxy => body.radius(),
        }
    }

    /// Acceleration of `target` under `force`
    pub fn acceleration(self, target: &Body, force: DVec2) -> DVec2 {
        match self {
            GravityModel::MassWeighted => force / target.mass(),
            GravityModel::RadiusProxy => force,
        }
    }
}

/// Calculate the gravitational force on `target` exerted by `other`
/// F = G * p1 * p2 / r², directed from `target` towards `other`
///
/// Coincident bodies exert no force on each other.
pub fn gravitational_force(target: &Body, other: &Body, model: GravityModel, g: f64) -> DVec2 {
    let r_vec = other.position - target.position;
    let r = r_vec.length();

    if r == 0.0 {
        return DVec2::ZERO;
    }

    let force_magnitude = g * model.mass_proxy(target) * model.mass_proxy(other) / (r * r);
    r_vec / r * force_magnitude
}

/// Net acceleration on `bodies[index]` from every other body
pub fn acceleration_on(bodies: &[Body], index: usize, model: GravityModel, g: f64) -> DVec2 {
    let target = &bodies[index];

    bodies
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != index)
        .map(|(_, other)| model.acceleration(target, gravitational_force(target, other, model, g)))
        .fold(DVec2::ZERO, |acc, a| acc + a)
}
