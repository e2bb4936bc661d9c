//! Picking ray between the near and far clip planes

use crate::core::types::{Mat4, Vec2, Vec3};
use super::aabb::Aabb;

/// A ray defined by origin and direction.
///
/// Rays built by [`Ray::unproject`] are not normalized: `direction` spans the
/// whole near-to-far segment, so `t` in `[0, 1]` covers the visible depth.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    /// Precomputed 1/direction for fast AABB intersection
    pub inv_direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            inv_direction: Vec3::ONE / direction,
        }
    }

    /// Ray from `from` to `to`; `at(1.0) == to`
    pub fn between(from: Vec3, to: Vec3) -> Self {
        Self::new(from, to - from)
    }

    /// Unproject a normalized-device-coordinate position at the near (z = -1)
    /// and far (z = 1) planes through `inverse_view_proj`.
    pub fn unproject(ndc: Vec2, inverse_view_proj: &Mat4) -> Self {
        let from = inverse_view_proj.project_point3(ndc.extend(-1.0));
        let to = inverse_view_proj.project_point3(ndc.extend(1.0));
        Self::between(from, to)
    }

    /// Get point along ray at parameter t
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Ray-AABB intersection using slab method
    /// Returns Some((t_near, t_far)) if intersection, None otherwise
    pub fn intersects_aabb(&self, aabb: &Aabb) -> Option<(f32, f32)> {
        let t1 = (aabb.min - self.origin) * self.inv_direction;
        let t2 = (aabb.max - self.origin) * self.inv_direction;

        let t_min = t1.min(t2);
        let t_max = t1.max(t2);

        let t_near = t_min.x.max(t_min.y).max(t_min.z);
        let t_far = t_max.x.min(t_max.y).min(t_max.z);

        if t_near <= t_far && t_far >= 0.0 {
            Some((t_near.max(0.0), t_far))
        } else {
            None
        }
    }
}
