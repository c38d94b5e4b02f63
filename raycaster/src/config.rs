use crate::raycast::debug::RaycastDrawSettings;
use crate::raycast::emitter::DEFAULT_ANGLE_STEP;
use glam::IVec2;
use glam::Vec2;

#[derive(Debug)]
pub struct RaycastingConfig {
    pub title: String,
    pub window_size: IVec2,
    pub target_fps: u32,
    pub swap_interval: i32,

    pub wall_count: usize,
    pub angle_step: u32,

    pub noise_x_offset: f64,
    pub noise_y_offset: f64,
    pub noise_step: f64,
    pub noise_scale: f32,

    pub draw: RaycastDrawSettings,
}

impl RaycastingConfig {
    pub fn screen_size(&self) -> Vec2 {
        self.window_size.as_vec2()
    }

    pub fn max_ray_distance(&self) -> f32 {
        self.window_size.x as f32
    }
}

impl Default for RaycastingConfig {
    fn default() -> Self {
        Self {
            title: "2D ray casting".to_string(),
            window_size: IVec2::new(400, 400),
            target_fps: 30,
            swap_interval: 0,

            wall_count: 5,
            angle_step: DEFAULT_ANGLE_STEP,

            noise_x_offset: 0.0,
            noise_y_offset: 0.5,
            noise_step: 0.01,
            noise_scale: 3.0,

            draw: Default::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_small_square_window() {
        let config = RaycastingConfig::default();

        assert_eq!(config.title, "2D ray casting");
        assert_eq!(config.screen_size(), Vec2::new(400.0, 400.0));
        assert_eq!(config.max_ray_distance(), 400.0);
        assert_eq!(config.target_fps, 30);
    }

    #[test]
    fn defaults_describe_scene() {
        let config = RaycastingConfig::default();

        assert_eq!(config.wall_count, 5);
        assert_eq!(config.angle_step, 10);
        assert_eq!(config.noise_step, 0.01);
        assert_eq!(config.noise_scale, 3.0);
        assert_eq!((config.noise_x_offset, config.noise_y_offset), (0.0, 0.5));
        assert_eq!(config.draw.ray_length, 10.0);
    }
}
