//! Axis-aligned bounding box

use crate::core::types::{IVec3, Vec3};

/// Axis-aligned bounding box defined by min and max corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create AABB from min and max corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Unit cube occupied by the voxel at `coord`.
    ///
    /// Voxels are centred on their integer coordinate, so the grid planes at
    /// 0 and N pass through the centres of the outermost layer.
    pub fn voxel_cell(coord: IVec3) -> Self {
        let center = coord.as_vec3();
        Self {
            min: center - Vec3::splat(0.5),
            max: center + Vec3::splat(0.5),
        }
    }

    /// Get center point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Check if point is inside AABB, boundary included, widened by `eps`
    pub fn contains_point_eps(&self, p: Vec3, eps: f32) -> bool {
        p.x >= self.min.x - eps && p.x <= self.max.x + eps &&
        p.y >= self.min.y - eps && p.y <= self.max.y + eps &&
        p.z >= self.min.z - eps && p.z <= self.max.z + eps
    }

    /// Axis-aligned unit normal of the side of the box closest to `point`.
    ///
    /// Picks the dominant axis of `point - center` (relative to the half
    /// extent). Ties resolve in x, y, z order.
    pub fn dominant_normal(&self, point: Vec3) -> Vec3 {
        let half = (self.max - self.min) * 0.5;
        let rel = (point - self.center()) / half.max(Vec3::splat(f32::EPSILON));
        let abs = rel.abs();

        if abs.x >= abs.y && abs.x >= abs.z {
            Vec3::new(rel.x.signum(), 0.0, 0.0)
        } else if abs.y >= abs.z {
            Vec3::new(0.0, rel.y.signum(), 0.0)
        } else {
            Vec3::new(0.0, 0.0, rel.z.signum())
        }
    }
}
