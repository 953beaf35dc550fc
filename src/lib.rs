//! N-body gravity visualizations
//!
//! Two programs share this host: `solar-system` (a sun and five planets) and
//! `three-body` (four randomly placed bodies). Physics lives in
//! `orrery-physics` and `orrery-simulation`; this crate owns the window, the
//! tick scheduler and the widgets.

pub mod app;
pub mod clock;
mod gui;

pub use app::run;
