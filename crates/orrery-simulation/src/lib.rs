//! # Orrery Simulation
//!
//! Headless N-body simulation state: scenarios, ticking, camera focus and
//! the draw primitives a host renders each frame.

pub mod draw;
pub mod focus;
pub mod params;
pub mod scenario;
pub mod simulation;

pub use draw::*;
pub use focus::*;
pub use params::*;
pub use scenario::*;
pub use simulation::*;
