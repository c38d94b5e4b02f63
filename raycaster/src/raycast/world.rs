use super::Boundary;
use fastrand::Rng;
use glam::Vec2;
use log::info;

// Integer endpoints, both bounds inclusive
pub fn generate_walls(rng: &mut Rng, count: usize, size: Vec2) -> Vec<Boundary> {
    let width = size.x.max(0.0) as u32;
    let height = size.y.max(0.0) as u32;

    let walls = (0..count)
        .map(|_| {
            let x1 = rng.u32(0..=width) as f32;
            let x2 = rng.u32(0..=width) as f32;
            let y1 = rng.u32(0..=height) as f32;
            let y2 = rng.u32(0..=height) as f32;

            Boundary::new(x1, y1, x2, y2)
        })
        .collect::<Vec<_>>();

    info!("Generated {} walls in {}x{} area", walls.len(), width, height);
    walls
}
