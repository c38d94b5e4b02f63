use super::emitter::RayEmitter;
use super::emitter::ScanResponse;
use super::Boundary;
use crate::renderer::context::RendererContext;
use crate::renderer::shape::Shape;
use glam::Vec4;

#[derive(Debug)]
pub struct RaycastDrawSettings {
    pub wall_color: Vec4,
    pub emitter_color: Vec4,
    pub ray_color: Vec4,
    pub scan_color: Vec4,

    pub wall_thickness: f32,
    pub ray_thickness: f32,
    pub scan_thickness: f32,
    pub ray_length: f32,
    pub ray_origin_radius: f32,
    pub emitter_radius: f32,
}

impl Default for RaycastDrawSettings {
    fn default() -> Self {
        Self {
            wall_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            emitter_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            ray_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            scan_color: Vec4::new(1.0, 1.0, 1.0, 1.0),

            wall_thickness: 2.0,
            ray_thickness: 1.0,
            scan_thickness: 1.0,
            ray_length: 10.0,
            ray_origin_radius: 2.0,
            emitter_radius: 4.0,
        }
    }
}

pub fn get_wall_shapes(walls: &[Boundary], settings: &RaycastDrawSettings) -> Vec<Shape> {
    walls.iter().map(|wall| Shape::new_line(wall.a, wall.b, settings.wall_thickness, settings.wall_color)).collect()
}

pub fn draw_walls(renderer: &mut RendererContext, walls: &[Boundary], settings: &RaycastDrawSettings) {
    for shape in get_wall_shapes(walls, settings) {
        renderer.draw_shape(&shape);
    }
}

impl RayEmitter {
    pub fn get_indicator_shapes(&self, settings: &RaycastDrawSettings) -> Vec<Shape> {
        let mut shapes = Vec::with_capacity(1 + self.rays_count() * 2);
        shapes.push(Shape::new_disc(self.position, settings.emitter_radius, None, settings.emitter_color));

        for ray in self.rays() {
            let end = ray.position + ray.direction * settings.ray_length;

            shapes.push(Shape::new_line(ray.position, end, settings.ray_thickness, settings.ray_color));
            shapes.push(Shape::new_disc(ray.position, settings.ray_origin_radius, None, settings.ray_color));
        }

        shapes
    }

    pub fn get_scan_shapes(&self, response: &ScanResponse, settings: &RaycastDrawSettings) -> Vec<Shape> {
        response.visible().map(|hit| Shape::new_line(self.position, hit.position, settings.scan_thickness, settings.scan_color)).collect()
    }

    pub fn draw(&self, renderer: &mut RendererContext, response: &ScanResponse, settings: &RaycastDrawSettings) {
        for shape in self.get_indicator_shapes(settings) {
            renderer.draw_shape(&shape);
        }

        for shape in self.get_scan_shapes(response, settings) {
            renderer.draw_shape(&shape);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raycast::emitter::DEFAULT_ANGLE_STEP;
    use glam::Vec2;

    #[test]
    fn every_wall_is_drawn() {
        let walls = [Boundary::new(0.0, 0.0, 10.0, 10.0), Boundary::new(5.0, 5.0, 5.0, 50.0)];
        assert_eq!(get_wall_shapes(&walls, &RaycastDrawSettings::default()).len(), 2);
    }

    #[test]
    fn no_walls_draws_only_indicators() {
        let settings = RaycastDrawSettings::default();
        let emitter = RayEmitter::new(Vec2::new(200.0, 200.0), DEFAULT_ANGLE_STEP, 400.0);
        let response = emitter.scan(&[]);

        assert_eq!(emitter.get_indicator_shapes(&settings).len(), 1 + 36 * 2);
        assert!(emitter.get_scan_shapes(&response, &settings).is_empty());
    }

    #[test]
    fn scan_lines_match_visible_hits() {
        let settings = RaycastDrawSettings::default();
        let emitter = RayEmitter::new(Vec2::new(200.0, 100.0), DEFAULT_ANGLE_STEP, 400.0);

        let response = emitter.scan(&[Boundary::new(0.0, 200.0, 400.0, 200.0)]);
        let shapes = emitter.get_scan_shapes(&response, &settings);

        assert_eq!(shapes.len(), response.visible().count());
        assert!(!shapes.is_empty());
    }
}
