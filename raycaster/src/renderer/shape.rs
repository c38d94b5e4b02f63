use crate::utils::color::Vec4Color;
use glam::Vec2;
use glam::Vec4;
use std::f32::consts;

/// Number of `u32` words per vertex: position x, position y (both as f32 bits) and packed RGBA color.
pub const VERTEX_SIZE: usize = 3;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shape {
    pub vertices: Vec<u32>,
    pub indices: Vec<u32>,
}

impl Shape {
    pub fn new() -> Self {
        Self { vertices: Default::default(), indices: Default::default() }
    }

    pub fn new_line(from: Vec2, to: Vec2, thickness: f32, color: Vec4) -> Self {
        let direction = (to - from).normalize_or_zero();
        let normal = direction.perp() * (thickness / 2.0);
        let color = color.to_rgb_packed();

        // Both ends are pushed out by half a pixel so thin lines cover their endpoints
        let from = from - direction * 0.5;
        let to = to + direction * 0.5;

        let mut shape = Shape::new();
        shape.push_vertex(from - normal, color);
        shape.push_vertex(from + normal, color);
        shape.push_vertex(to + normal, color);
        shape.push_vertex(to - normal, color);
        shape.indices.extend_from_slice(&[0, 1, 2, 0, 2, 3]);

        shape
    }

    pub fn new_disc(center: Vec2, radius: f32, sides: Option<u32>, color: Vec4) -> Self {
        let sides = sides.unwrap_or((radius * 4.0) as u32).max(3);
        let color = color.to_rgb_packed();
        let angle_step = consts::TAU / sides as f32;

        let mut shape = Shape::new();
        shape.push_vertex(center, color);

        for i in 0..sides {
            let angle = i as f32 * angle_step;
            shape.push_vertex(center + Vec2::from_angle(angle) * radius, color);

            if i > 0 {
                shape.indices.extend_from_slice(&[0, i, i + 1]);
            }
        }

        shape.indices.extend_from_slice(&[0, sides, 1]);
        shape
    }

    fn push_vertex(&mut self, position: Vec2, color: u32) {
        self.vertices.extend_from_slice(&[position.x.to_bits(), position.y.to_bits(), color]);
    }
}
