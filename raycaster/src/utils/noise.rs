use ::noise::NoiseFn;
use ::noise::Perlin;
use glam::Vec2;

pub struct NoiseWanderer {
    pub x_offset: f64,
    pub y_offset: f64,
    pub step: f64,
    pub scale: f32,

    noise: Perlin,
}

impl NoiseWanderer {
    pub fn new(seed: u32) -> Self {
        Self { x_offset: 0.0, y_offset: 0.5, step: 0.01, scale: 3.0, noise: Perlin::new(seed) }
    }

    // Not clamped, positions can leave the visible area
    pub fn next_position(&mut self, size: Vec2) -> Vec2 {
        let x = self.noise.get([self.x_offset, self.y_offset]).abs() as f32 * size.x * self.scale;
        let y = self.sample_1d(self.x_offset).abs() as f32 * size.y * self.scale;

        self.x_offset += self.step;
        self.y_offset += self.step;

        Vec2::new(x, y)
    }

    // 1D noise is the y = 0 slice of the same 2D function
    fn sample_1d(&self, x: f64) -> f64 {
        self.noise.get([x, 0.0])
    }
}

impl Default for NoiseWanderer {
    fn default() -> Self {
        Self::new(fastrand::u32(..))
    }
}
