//! Infinite plane and segment intersection

use crate::core::types::Vec3;
use super::ray::Ray;

/// Below this |n . d| the segment is treated as parallel to the plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// A plane through `point` with unit `normal`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl Plane {
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self { point, normal }
    }

    /// Intersect the segment `ray.at(0)..=ray.at(1)` with this plane.
    ///
    /// Returns `None` when the segment is parallel to the plane or crosses it
    /// outside the segment (behind the near plane or past the far plane).
    pub fn intersect_segment(&self, ray: &Ray) -> Option<Vec3> {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = self.normal.dot(self.point - ray.origin) / denom;
        if !(0.0..=1.0).contains(&t) {
            return None;
        }

        Some(ray.at(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect_floor() {
        let floor = Plane::new(Vec3::ZERO, Vec3::Y);
        let ray = Ray::between(Vec3::new(1.0, 4.0, 2.0), Vec3::new(3.0, -4.0, 2.0));
        let hit = floor.intersect_segment(&ray).unwrap();
        assert!((hit - Vec3::new(2.0, 0.0, 2.0)).length() < 1e-6);
    }

    #[test]
    fn test_parallel_misses() {
        let floor = Plane::new(Vec3::ZERO, Vec3::Y);
        let ray = Ray::between(Vec3::new(0.0, 1.0, 0.0), Vec3::new(10.0, 1.0, 0.0));
        assert!(floor.intersect_segment(&ray).is_none());
    }

    #[test]
    fn test_outside_segment_misses() {
        let wall = Plane::new(Vec3::new(9.0, 0.0, 0.0), -Vec3::X);
        let short = Ray::between(Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0));
        assert!(wall.intersect_segment(&short).is_none());

        let behind = Ray::between(Vec3::new(10.0, 0.0, 0.0), Vec3::new(20.0, 0.0, 0.0));
        assert!(wall.intersect_segment(&behind).is_none());
    }

    #[test]
    fn test_normal_orientation_irrelevant() {
        let up = Plane::new(Vec3::new(0.0, 9.0, 0.0), Vec3::Y);
        let down = Plane::new(Vec3::new(0.0, 9.0, 0.0), -Vec3::Y);
        let ray = Ray::between(Vec3::new(4.0, 20.0, 4.0), Vec3::new(4.0, 0.0, 4.0));
        assert_eq!(up.intersect_segment(&ray), down.intersect_segment(&ray));
    }
}
