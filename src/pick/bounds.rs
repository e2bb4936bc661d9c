//! The six walls of the edit volume, as seen by the grid raycast

use crate::core::types::Vec3;
use crate::math::{Aabb, Plane};
use crate::voxel::Face;

/// One bounding wall: the plane plus the face identity reported on a hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPlane {
    pub plane: Plane,
    /// Face whose outward normal equals the plane normal
    pub face: Face,
}

/// Priority order of the walls.
///
/// ORDER IS LOAD-BEARING: the resolver takes the first wall in this order
/// whose hit lies inside the volume, not the nearest one. A ray through the
/// box crosses two walls, where it enters and where it leaves; the walls at 0
/// come first so a camera above and in front of the volume lands on the far
/// side (floor and back walls) instead of a cell floating on a near wall.
/// Each entry is (inward normal, plane sits at N rather than 0).
const WALL_ORDER: [(Vec3, bool); 6] = [
    (Vec3::Y, false),     // floor, y = 0
    (Vec3::X, false),     // x = 0
    (Vec3::Z, false),     // z = 0
    (Vec3::NEG_Y, true),  // ceiling, y = N
    (Vec3::NEG_X, true),  // x = N
    (Vec3::NEG_Z, true),  // z = N
];

/// Fixed, ordered wall table for an edit volume of `0..=N`
#[derive(Clone, Debug)]
pub struct BoundingPlanes {
    planes: [GridPlane; 6],
    bounds: Aabb,
}

impl BoundingPlanes {
    pub fn new(grid_size: i32) -> Self {
        let n = grid_size as f32;
        let planes = WALL_ORDER.map(|(normal, at_far_side)| {
            let point = if at_far_side { Vec3::splat(n) } else { Vec3::ZERO };
            GridPlane {
                plane: Plane::new(point, normal),
                face: Face::from_normal(normal),
            }
        });

        Self {
            planes,
            bounds: Aabb::new(Vec3::ZERO, Vec3::splat(n)),
        }
    }

    /// Walls in priority order
    pub fn planes(&self) -> &[GridPlane; 6] {
        &self.planes
    }

    /// Inclusive `[0, N]` box a wall hit must land in
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }
}
