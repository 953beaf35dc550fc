//! # Orrery Physics
//!
//! Bodies, trails and Newtonian gravity for small 2D N-body systems.

pub mod body;
pub mod constants;
pub mod forces;
pub mod integrator;
pub mod trail;

pub use body::*;
pub use constants::*;
pub use forces::*;
pub use integrator::*;
pub use trail::*;
