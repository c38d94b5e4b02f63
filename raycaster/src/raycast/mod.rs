use glam::Vec2;

pub mod debug;
pub mod emitter;
pub mod world;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Boundary {
    pub a: Vec2,
    pub b: Vec2,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub position: Vec2,
    pub direction: Vec2,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    pub position: Vec2,
    pub distance: f32,
    pub boundary: usize,
}

impl Boundary {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { a: Vec2::new(x1, y1), b: Vec2::new(x2, y2) }
    }

}

impl Ray {
    pub fn new(position: Vec2, angle: f32) -> Self {
        Self { position, direction: Vec2::from_angle(angle) }
    }

    pub fn with_direction(position: Vec2, direction: Vec2) -> Self {
        Self { position, direction }
    }

    // Zero length direction is kept as is, such ray never hits anything
    pub fn look_at(&mut self, target: Vec2) {
        self.direction = target - self.position;

        let length = self.direction.length();
        if length != 0.0 {
            self.direction /= length;
        }
    }

    /// Algorithm based on:
    /// - https://en.wikipedia.org/wiki/Line%E2%80%93line_intersection#Given_two_points_on_each_line_segment
    pub fn cast(&self, boundary: &Boundary) -> Option<Vec2> {
        let (x1, y1) = (boundary.a.x, boundary.a.y);
        let (x2, y2) = (boundary.b.x, boundary.b.y);

        let (x3, y3) = (self.position.x, self.position.y);
        let (x4, y4) = (self.position.x + self.direction.x, self.position.y + self.direction.y);

        let den = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
        if den == 0.0 {
            return None;
        }

        let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / den;
        let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / den;

        // Segment endpoints and the ray origin itself are excluded, no tolerance
        if t > 0.0 && t < 1.0 && u > 0.0 {
            Some(Vec2::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use std::f32::consts;

    fn horizontal_wall() -> Boundary {
        Boundary::new(0.0, 200.0, 400.0, 200.0)
    }

    #[test]
    fn ray_from_angle_is_unit_length() {
        for degrees in (0..360).step_by(10) {
            let ray = Ray::new(Vec2::ZERO, (degrees as f32).to_radians());
            assert_relative_eq!(ray.direction.length(), 1.0, max_relative = 1e-6);
        }

        let ray = Ray::new(Vec2::new(5.0, 5.0), consts::PI);
        assert_relative_eq!(ray.direction.x, -1.0);
        assert!(ray.direction.y.abs() < 1e-6);
    }

    #[test]
    fn look_at_normalizes_direction() {
        let mut ray = Ray::with_direction(Vec2::new(10.0, 10.0), Vec2::X);
        ray.look_at(Vec2::new(13.0, 14.0));

        assert_relative_eq!(ray.direction.x, 0.6);
        assert_relative_eq!(ray.direction.y, 0.8);
    }

    #[test]
    fn look_at_own_origin_leaves_zero_direction() {
        let mut ray = Ray::with_direction(Vec2::new(10.0, 10.0), Vec2::X);
        ray.look_at(Vec2::new(10.0, 10.0));

        assert_eq!(ray.direction, Vec2::ZERO);
        assert_eq!(ray.cast(&horizontal_wall()), None);
    }

    #[test]
    fn cast_hits_wall_below() {
        let ray = Ray::with_direction(Vec2::new(200.0, 100.0), Vec2::new(0.0, 1.0));
        let hit = ray.cast(&horizontal_wall()).unwrap();

        assert_eq!(hit, Vec2::new(200.0, 200.0));
        assert_eq!(hit.distance(ray.position), 100.0);
    }

    #[test]
    fn cast_ignores_wall_behind() {
        let ray = Ray::with_direction(Vec2::new(200.0, 100.0), Vec2::new(0.0, -1.0));
        assert_eq!(ray.cast(&horizontal_wall()), None);
    }

    #[test]
    fn cast_rejects_wall_endpoints() {
        let wall = Boundary::new(0.0, 0.0, 10.0, 0.0);

        let at_a = Ray::with_direction(Vec2::new(0.0, 5.0), Vec2::new(0.0, -1.0));
        let at_b = Ray::with_direction(Vec2::new(10.0, 5.0), Vec2::new(0.0, -1.0));
        let past_b = Ray::with_direction(Vec2::new(11.0, 5.0), Vec2::new(0.0, -1.0));
        let inside = Ray::with_direction(Vec2::new(1.0, 5.0), Vec2::new(0.0, -1.0));

        assert_eq!(at_a.cast(&wall), None);
        assert_eq!(at_b.cast(&wall), None);
        assert_eq!(past_b.cast(&wall), None);
        assert_eq!(inside.cast(&wall), Some(Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn cast_rejects_origin_on_wall() {
        let wall = Boundary::new(0.0, 0.0, 10.0, 0.0);
        let ray = Ray::with_direction(Vec2::new(5.0, 0.0), Vec2::new(0.0, 1.0));

        assert_eq!(ray.cast(&wall), None);
    }

    #[test]
    fn cast_against_degenerate_wall() {
        let wall = Boundary::new(50.0, 50.0, 50.0, 50.0);
        let ray = Ray::with_direction(Vec2::new(0.0, 50.0), Vec2::X);

        assert_eq!(ray.cast(&wall), None);
    }

    proptest! {
        #[test]
        fn cast_parallel_never_hits(
            ox in -500i32..500, oy in -500i32..500,
            ax in -500i32..500, ay in -500i32..500,
            dx in -20i32..20, dy in -20i32..20,
            k in 1i32..20,
        ) {
            prop_assume!(dx != 0 || dy != 0);

            let direction = Vec2::new(dx as f32, dy as f32);
            let a = Vec2::new(ax as f32, ay as f32);
            let wall = Boundary { a, b: a + direction * k as f32 };
            let ray = Ray::with_direction(Vec2::new(ox as f32, oy as f32), direction);

            prop_assert_eq!(ray.cast(&wall), None);
        }

        #[test]
        fn cast_never_hits_behind_origin(
            ox in -500i32..500, oy in -500i32..500,
            behind in 0i32..300, half_width in 1i32..300,
        ) {
            let origin = Vec2::new(ox as f32, oy as f32);
            let y = (oy - behind) as f32;
            let wall = Boundary::new((ox - half_width) as f32, y, (ox + half_width) as f32, y);
            let ray = Ray::with_direction(origin, Vec2::new(0.0, 1.0));

            prop_assert_eq!(ray.cast(&wall), None);
        }

        #[test]
        fn cast_at_wall_midpoint_returns_target(
            ox in -500.0f32..500.0, oy in -500.0f32..500.0,
            angle in 0.0f32..consts::TAU,
            distance in 1.0f32..500.0, half_length in 1.0f32..200.0,
        ) {
            let origin = Vec2::new(ox, oy);
            let towards = Vec2::from_angle(angle);
            let midpoint = origin + towards * distance;
            let wall = Boundary { a: midpoint - towards.perp() * half_length, b: midpoint + towards.perp() * half_length };

            let mut ray = Ray::with_direction(origin, Vec2::ZERO);
            ray.look_at(midpoint);

            let hit = ray.cast(&wall);
            prop_assert!(hit.is_some());

            let hit = hit.unwrap();
            prop_assert!((hit.distance(origin) - distance).abs() <= distance * 1e-3);
            prop_assert!(hit.distance(midpoint) <= distance * 1e-3);
        }
    }
}
