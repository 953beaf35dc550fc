//! Simulation state owned by the host
//!
//! The host drives it with [`Simulation::advance`] once per tick, reads
//! [`Simulation::render_data`] and [`Simulation::camera_offset`] when drawing,
//! and calls [`Simulation::restart`] between ticks.

use crate::draw::{render_data, DrawCommand};
use crate::focus::{camera_offset, focal_point};
use crate::params::SimulationParams;
use crate::scenario::Scenario;
use glam::DVec2;
use orrery_physics::{step, Body};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct Simulation {
    scenario: Scenario,
    params: SimulationParams,
    bodies: Vec<Body>,
    rng: StdRng,
    ticks: u64,
    elapsed: f64,
}

impl Simulation {
    /// Start `scenario` with its preset parameters
    pub fn new(scenario: Scenario) -> Self {
        Self::with_params(scenario, scenario.default_params())
    }

    pub fn with_params(scenario: Scenario, params: SimulationParams) -> Self {
        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let bodies = scenario.spawn(&params, &mut rng);

        log::info!(
            "✓ {} initialized with {} bodies",
            scenario.title(),
            bodies.len()
        );

        Self {
            scenario,
            params,
            bodies,
            rng,
            ticks: 0,
            elapsed: 0.0,
        }
    }

    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Ticks since start or last restart
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulated time since start or last restart
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn set_gravity(&mut self, gravity: f64) {
        self.params.gravity = gravity;
    }

    /// One tick of `dt` seconds
    pub fn advance(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            log::trace!("skipping tick with dt={}", dt);
            return;
        }

        step(&mut self.bodies, self.params.model, self.params.gravity, dt);
        self.ticks += 1;
        self.elapsed += dt;

        log::trace!("tick {} dt={:.5}", self.ticks, dt);
    }

    /// Replace every body with a freshly spawned set
    pub fn restart(&mut self) {
        let fresh = self.scenario.spawn(&self.params, &mut self.rng);
        self.bodies = fresh;
        self.ticks = 0;
        self.elapsed = 0.0;

        log::info!("↻ {} restarted", self.scenario.title());
        for body in &self.bodies {
            log::debug!(
                "  {} pos=({:.1},{:.1}) vel=({:.1},{:.1}) r={:.1} m={:.1}",
                body.name.unwrap_or("body"),
                body.position.x,
                body.position.y,
                body.velocity.x,
                body.velocity.y,
                body.radius(),
                body.mass()
            );
        }
    }

    pub fn focal_point(&self) -> Option<DVec2> {
        focal_point(&self.bodies, self.params.focus)
    }

    /// Bottom-left corner of the viewport centered on the focal point
    pub fn camera_offset(&self) -> Option<DVec2> {
        self.focal_point()
            .map(|focal| camera_offset(focal, self.params.viewport))
    }

    pub fn render_data(&self) -> Vec<DrawCommand> {
        render_data(&self.bodies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{SCREEN_WIDTH, TICK_RATE};
    use orrery_physics::Trail;

    fn seeded(scenario: Scenario, seed: u64) -> Simulation {
        Simulation::with_params(scenario, scenario.default_params().with_seed(seed))
    }

    #[test]
    fn test_trail_length_tracks_ticks() {
        let mut sim = seeded(Scenario::SolarSystem, 1);
        let dt = 1.0 / TICK_RATE;

        for k in 1..50 {
            sim.advance(dt);
            assert!(sim.bodies().iter().all(|b| b.trail().len() == k));
        }
        for _ in 0..25 {
            sim.advance(dt);
        }

        assert_eq!(sim.ticks(), 74);
        assert!(sim.bodies().iter().map(Body::trail).all(|t| t.len() == 50));
    }

    #[test]
    fn test_three_body_trail_capacity() {
        let mut sim = seeded(Scenario::ThreeBody, 3);
        for _ in 0..150 {
            sim.advance(1.0 / 60.0);
        }

        assert!(sim.bodies().iter().map(Body::trail).all(|t| t.len() == 100));
    }

    #[test]
    fn test_restart_resets_structure() {
        for scenario in [Scenario::SolarSystem, Scenario::ThreeBody] {
            let mut sim = seeded(scenario, 11);
            for _ in 0..20 {
                sim.advance(1.0 / 60.0);
            }

            sim.restart();

            assert_eq!(sim.bodies().len(), scenario.body_count());
            assert!(sim.bodies().iter().map(Body::trail).all(Trail::is_empty));
            assert_eq!(sim.ticks(), 0);
            assert_eq!(sim.elapsed(), 0.0);

            // Idempotent in structure
            sim.restart();
            assert_eq!(sim.bodies().len(), scenario.body_count());
            assert!(sim.bodies().iter().map(Body::trail).all(Trail::is_empty));
        }
    }

    #[test]
    fn test_restart_restores_solar_layout() {
        let mut sim = seeded(Scenario::SolarSystem, 5);
        let initial = sim.bodies().to_vec();

        for _ in 0..30 {
            sim.advance(1.0 / 60.0);
        }
        assert_ne!(sim.bodies(), initial.as_slice());

        sim.restart();
        assert_eq!(sim.bodies(), initial.as_slice());
    }

    #[test]
    fn test_restart_rerolls_three_body() {
        let mut sim = seeded(Scenario::ThreeBody, 5);
        let initial = sim.bodies().to_vec();

        sim.restart();
        assert_ne!(sim.bodies(), initial.as_slice());
    }

    #[test]
    fn test_invalid_dt_does_not_tick() {
        let mut sim = seeded(Scenario::SolarSystem, 1);
        sim.advance(0.0);
        sim.advance(f64::NAN);

        assert_eq!(sim.ticks(), 0);
        assert!(sim.bodies().iter().all(|b| b.trail().is_empty()));
    }

    #[test]
    fn test_sun_camera_offset() {
        let sim = seeded(Scenario::SolarSystem, 1);

        assert_eq!(sim.focal_point(), Some(DVec2::new(500.0, 350.0)));
        assert_eq!(sim.camera_offset(), Some(DVec2::ZERO));
    }

    #[test]
    fn test_camera_follows_sun_after_tick() {
        let mut sim = seeded(Scenario::SolarSystem, 1);
        sim.advance(1.0 / 60.0);

        let sun = sim.bodies().iter().find(|b| b.is_sun).map(|b| b.position);
        let offset = sim.camera_offset();
        assert_eq!(offset, sun.map(|p| p - DVec2::new(SCREEN_WIDTH / 2.0, 350.0)));
    }

    #[test]
    fn test_centroid_camera_offset() {
        let sim = seeded(Scenario::ThreeBody, 9);
        let mean = sim
            .bodies()
            .iter()
            .fold(DVec2::ZERO, |acc, b| acc + b.position)
            / sim.bodies().len() as f64;

        let focal = sim.focal_point().map(|f| (f - mean).length());
        assert!(focal.is_some_and(|d| d < 1e-9));
    }

    #[test]
    fn test_gravity_override() {
        let mut sim = seeded(Scenario::SolarSystem, 1);
        sim.set_gravity(0.0);
        let before: Vec<DVec2> = sim.bodies().iter().map(|b| b.velocity).collect();

        sim.advance(1.0 / 60.0);

        let after: Vec<DVec2> = sim.bodies().iter().map(|b| b.velocity).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_render_data_covers_every_body() {
        let mut sim = seeded(Scenario::ThreeBody, 2);
        for _ in 0..5 {
            sim.advance(1.0 / 60.0);
        }

        let circles = sim
            .render_data()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count();
        assert_eq!(circles, 4);
        // 5 trail points -> 4 segments per body, plus the disc
        assert_eq!(sim.render_data().len(), 4 * 5);
    }
}
