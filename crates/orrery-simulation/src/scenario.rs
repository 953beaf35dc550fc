//! Initial body layouts
//!
//! Positions are in a y-up world whose origin is the bottom-left corner of
//! the 1000x700 viewport.

use crate::focus::FocusMode;
use crate::params::{SimulationParams, SCREEN_HEIGHT, SCREEN_WIDTH};
use glam::DVec2;
use orrery_physics::{Body, Color, GravityModel, SOLAR_TRAIL_LENGTH, THREE_BODY_TRAIL_LENGTH};
use rand::Rng;
use std::ops::Range;

const CENTER: DVec2 = DVec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);

const SUNGLOW: Color = Color::rgb(255, 204, 51);
const CADET_GREY: Color = Color::rgb(145, 163, 176);
const CADMIUM_YELLOW: Color = Color::rgb(255, 246, 0);
const BABY_BLUE: Color = Color::rgb(137, 207, 240);
const SAE_ORANGE: Color = Color::rgb(255, 121, 0);
const BURLYWOOD: Color = Color::rgb(222, 184, 135);

const THREE_BODY_COLORS: [Color; 4] = [
    Color::rgb(227, 55, 30),
    Color::rgb(5, 147, 162),
    Color::rgb(255, 122, 72),
    Color::rgb(16, 55, 120),
];

/// Spawn box and ranges for the randomized system
pub const THREE_BODY_X: Range<f64> = 400.0..600.0;
pub const THREE_BODY_Y: Range<f64> = 250.0..450.0;
pub const THREE_BODY_RADIUS: Range<f64> = 5.0..15.0;
pub const THREE_BODY_VELOCITY: Range<f64> = -50.0..50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Sun and five planets, deterministic layout
    SolarSystem,
    /// Four bodies with random positions, sizes and velocities
    ThreeBody,
}

impl Scenario {
    pub fn title(self) -> &'static str {
        match self {
            Scenario::SolarSystem => "Solar System",
            Scenario::ThreeBody => "Three Body",
        }
    }

    /// Number of bodies every spawn produces
    #[cfg(test)]
    pub(crate) fn body_count(self) -> usize {
        match self {
            Scenario::SolarSystem => 6,
            Scenario::ThreeBody => THREE_BODY_COLORS.len(),
        }
    }

    pub fn default_params(self) -> SimulationParams {
        match self {
            Scenario::SolarSystem => SimulationParams {
                model: GravityModel::MassWeighted,
                trail_capacity: SOLAR_TRAIL_LENGTH,
                focus: FocusMode::Sun,
                ..Default::default()
            },
            Scenario::ThreeBody => SimulationParams {
                model: GravityModel::RadiusProxy,
                trail_capacity: THREE_BODY_TRAIL_LENGTH,
                focus: FocusMode::Centroid,
                ..Default::default()
            },
        }
    }

    /// Fresh bodies with empty trails
    pub fn spawn<R: Rng + ?Sized>(self, params: &SimulationParams, rng: &mut R) -> Vec<Body> {
        let bodies = match self {
            Scenario::SolarSystem => solar_system(),
            Scenario::ThreeBody => three_body(rng),
        };

        bodies
            .into_iter()
            .map(|b| b.with_trail_capacity(params.trail_capacity))
            .collect()
    }
}

/// Point on an ellipse at `degrees`, measured clockwise from +y
fn polar(degrees: f64, rx: f64, ry: f64) -> DVec2 {
    let theta = degrees.to_radians();
    DVec2::new(theta.sin() * rx, theta.cos() * ry)
}

fn velocity(speed: f64, degrees: f64) -> DVec2 {
    polar(degrees, speed, speed)
}

/// Position on a circular orbit around the viewport center
fn orbit(degrees: f64, radius: f64) -> DVec2 {
    CENTER + polar(degrees, radius, radius)
}

fn solar_system() -> Vec<Body> {
    vec![
        Body::new(CENTER, velocity(10.0, 100.0), 5000.0, 20.0)
            .named("sun")
            .with_color(SUNGLOW)
            .as_sun(),
        Body::new(orbit(180.0, 40.0), velocity(200.0, 90.0), 2.0, 4.0)
            .named("mercury")
            .with_color(CADET_GREY),
        Body::new(orbit(220.0, 75.0), velocity(200.0, 130.0), 5.0, 8.0)
            .named("venus")
            .with_color(CADMIUM_YELLOW),
        Body::new(orbit(45.0, 100.0), velocity(200.0, -45.0), 6.0, 8.0)
            .named("earth")
            .with_color(BABY_BLUE),
        Body::new(orbit(120.0, 150.0), velocity(200.0, 30.0), 3.0, 6.0)
            .named("mars")
            .with_color(SAE_ORANGE),
        // Jupiter sits on a squashed orbit
        Body::new(CENTER + polar(270.0, 400.0, 200.0), velocity(200.0, 180.0), 19.0, 13.0)
            .named("jupiter")
            .with_color(BURLYWOOD),
    ]
}

fn three_body<R: Rng + ?Sized>(rng: &mut R) -> Vec<Body> {
    THREE_BODY_COLORS
        .iter()
        .map(|&color| {
            let position = DVec2::new(
                rng.random_range(THREE_BODY_X),
                rng.random_range(THREE_BODY_Y),
            );
            let radius = rng.random_range(THREE_BODY_RADIUS);
            let velocity = DVec2::new(
                rng.random_range(THREE_BODY_VELOCITY),
                rng.random_range(THREE_BODY_VELOCITY),
            );

            // Radius doubles as mass in this system
            Body::new(position, velocity, radius, radius).with_color(color)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_solar_system_layout() {
        let mut rng = StdRng::seed_from_u64(0);
        let scenario = Scenario::SolarSystem;
        let bodies = scenario.spawn(&scenario.default_params(), &mut rng);

        assert_eq!(bodies.len(), scenario.body_count());
        assert_eq!(bodies.iter().filter(|b| b.is_sun).count(), 1);

        let sun = &bodies[0];
        assert_eq!(sun.name, Some("sun"));
        assert_eq!(sun.position, DVec2::new(500.0, 350.0));
        assert_eq!(sun.mass(), 5000.0);

        let mercury = &bodies[1];
        assert!((mercury.position - DVec2::new(500.0, 310.0)).length() < 1e-9);
        assert!((mercury.velocity - DVec2::new(200.0, 0.0)).length() < 1e-9);

        let jupiter = &bodies[5];
        assert!((jupiter.position - DVec2::new(100.0, 350.0)).length() < 1e-9);
        assert!((jupiter.velocity - DVec2::new(0.0, -200.0)).length() < 1e-9);

        for body in &bodies {
            assert!(body.mass() > 0.0);
            assert!(body.trail().is_empty());
            assert_eq!(body.trail().capacity(), SOLAR_TRAIL_LENGTH);
        }
    }

    #[test]
    fn test_solar_system_is_deterministic() {
        let scenario = Scenario::SolarSystem;
        let params = scenario.default_params();
        let a = scenario.spawn(&params, &mut StdRng::seed_from_u64(1));
        let b = scenario.spawn(&params, &mut StdRng::seed_from_u64(2));

        assert_eq!(a, b);
    }

    #[test]
    fn test_three_body_ranges() {
        let scenario = Scenario::ThreeBody;
        let params = scenario.default_params();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let bodies = scenario.spawn(&params, &mut rng);
            assert_eq!(bodies.len(), scenario.body_count());

            for body in &bodies {
                assert!(THREE_BODY_X.contains(&body.position.x));
                assert!(THREE_BODY_Y.contains(&body.position.y));
                assert!(THREE_BODY_RADIUS.contains(&body.radius()));
                assert!(THREE_BODY_VELOCITY.contains(&body.velocity.x));
                assert!(THREE_BODY_VELOCITY.contains(&body.velocity.y));
                assert_eq!(body.mass(), body.radius());
                assert!(!body.is_sun);
                assert_eq!(body.trail().capacity(), THREE_BODY_TRAIL_LENGTH);
            }
        }
    }

    #[test]
    fn test_three_body_seeded() {
        let scenario = Scenario::ThreeBody;
        let params = scenario.default_params();
        let a = scenario.spawn(&params, &mut StdRng::seed_from_u64(42));
        let b = scenario.spawn(&params, &mut StdRng::seed_from_u64(42));
        let c = scenario.spawn(&params, &mut StdRng::seed_from_u64(43));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_default_params() {
        let solar = Scenario::SolarSystem.default_params();
        assert_eq!(solar.model, GravityModel::MassWeighted);
        assert_eq!(solar.focus, FocusMode::Sun);
        assert_eq!(solar.trail_capacity, 50);

        let three = Scenario::ThreeBody.default_params();
        assert_eq!(three.model, GravityModel::RadiusProxy);
        assert_eq!(three.focus, FocusMode::Centroid);
        assert_eq!(three.trail_capacity, 100);
    }
}
