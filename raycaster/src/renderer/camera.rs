use glam::Mat4;
use glam::Vec2;
use glam::Vec3;

// Origin in the left-top corner, y grows downwards like window coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec2,
    pub size: Vec2,
}

impl Camera {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    pub fn get_projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(0.0, self.size.x, self.size.y, 0.0, 0.1, 100.0)
    }

    pub fn get_view_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(-self.position.x, -self.position.y, -1.0))
    }
}
