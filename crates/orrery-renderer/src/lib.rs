//! # Orrery Renderer
//!
//! Maps simulation draw commands onto an egui painter.

pub mod camera;
pub mod renderer;

pub use camera::*;
pub use renderer::*;
