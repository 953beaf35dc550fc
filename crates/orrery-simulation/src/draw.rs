//! Draw primitives produced from simulation state
//!
//! Coordinates are world-space; the host maps them to the screen.

use glam::DVec2;
use orrery_physics::{Body, Color};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Line {
        from: DVec2,
        to: DVec2,
        color: Color,
        width: f64,
    },
    Circle {
        center: DVec2,
        radius: f64,
        color: Color,
    },
}

/// Trails then discs, body by body.
///
/// Trail segments thicken from the oldest point towards the body: segment
/// `i` of an `n`-point trail is `radius / 2 * (i + 1) / n` wide.
pub fn render_data(bodies: &[Body]) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(bodies.iter().map(|b| b.trail().len() + 1).sum());

    for body in bodies {
        let trail = body.trail();
        let n = trail.len() as f64;

        commands.extend(trail.segments().enumerate().map(|(i, (from, to))| {
            DrawCommand::Line {
                from,
                to,
                color: body.color,
                width: body.radius() / 2.0 * (i as f64 + 1.0) / n,
            }
        }));

        commands.push(DrawCommand::Circle {
            center: body.position,
            radius: body.radius(),
            color: body.color,
        });
    }

    commands
}
