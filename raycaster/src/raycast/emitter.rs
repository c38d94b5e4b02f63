use super::*;
use glam::Vec2;

pub const DEFAULT_ANGLE_STEP: u32 = 10;

// Only directions are stored, every ray starts at the emitter position
pub struct RayEmitter {
    pub position: Vec2,
    pub max_distance: f32,

    directions: Vec<Vec2>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanResponse {
    pub hits: Vec<Option<RayHit>>,
}

impl RayEmitter {
    pub fn new(position: Vec2, angle_step: u32, max_distance: f32) -> Self {
        let directions = (0..360).step_by(angle_step.max(1) as usize).map(|angle| Vec2::from_angle((angle as f32).to_radians())).collect();

        Self { position, max_distance, directions }
    }

    pub fn update(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn rays(&self) -> impl Iterator<Item = Ray> + '_ {
        self.directions.iter().map(|direction| Ray::with_direction(self.position, *direction))
    }

    pub fn rays_count(&self) -> usize {
        self.directions.len()
    }

    pub fn scan(&self, walls: &[Boundary]) -> ScanResponse {
        let mut hits = Vec::with_capacity(self.directions.len());

        for ray in self.rays() {
            let mut closest = None;
            let mut record = self.max_distance;

            for (index, wall) in walls.iter().enumerate() {
                if let Some(point) = ray.cast(wall) {
                    let distance = self.position.distance(point);

                    // Strict comparison, the first wall wins ties
                    if distance < record {
                        record = distance;
                        closest = Some(RayHit { position: point, distance, boundary: index });
                    }
                }
            }

            hits.push(closest);
        }

        ScanResponse { hits }
    }
}

impl ScanResponse {
    pub fn visible(&self) -> impl Iterator<Item = &RayHit> {
        self.hits.iter().flatten()
    }
}
