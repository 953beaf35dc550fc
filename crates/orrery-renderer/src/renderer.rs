//! Painting of simulation draw commands

use crate::camera::Camera2d;
use egui::{Color32, Shape, Stroke};
use orrery_physics::Color;
use orrery_simulation::DrawCommand;

/// Window clear color
pub const BACKGROUND: Color32 = Color32::from_rgb(10, 20, 30);

pub fn to_color32(color: Color) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

/// Screen-space shapes for `commands` as seen through `camera`
pub fn to_shapes(camera: &Camera2d, commands: &[DrawCommand]) -> Vec<Shape> {
    commands
        .iter()
        .map(|command| match *command {
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => {
                let from = camera.world_to_screen(from);
                let to = camera.world_to_screen(to);
                Shape::line_segment(
                    [egui::pos2(from.x, from.y), egui::pos2(to.x, to.y)],
                    Stroke::new(width as f32, to_color32(color)),
                )
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                let center = camera.world_to_screen(center);
                Shape::circle_filled(
                    egui::pos2(center.x, center.y),
                    radius as f32,
                    to_color32(color),
                )
            }
        })
        .collect()
}

pub fn paint(painter: &egui::Painter, camera: &Camera2d, commands: &[DrawCommand]) {
    painter.extend(to_shapes(camera, commands));
}
