//! Snapping world positions onto the voxel grid

use crate::core::types::{IVec3, Vec3};

/// Round each axis to the nearest integer, ties away from zero.
///
/// One rule for every call keeps a cursor resting on an exact boundary
/// (0.0, N.0, k + 0.5) on the same cell from frame to frame.
pub fn round_to_voxel(p: Vec3) -> IVec3 {
    p.round().as_ivec3()
}
