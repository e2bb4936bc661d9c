//! Cube faces

use serde::{Deserialize, Serialize};

use crate::core::types::{IVec3, Vec3};

/// One side of a voxel, or none.
///
/// FRONT faces -Z and BACK faces +Z: the default camera looks down -Z, so the
/// face you see of a cube in front of you is its BACK.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    #[default]
    None,
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl Face {
    /// The six real faces
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
    ];

    /// Offset from a voxel to its neighbour across this face
    pub fn offset(self) -> IVec3 {
        match self {
            Face::Front => IVec3::new(0, 0, -1),
            Face::Back => IVec3::new(0, 0, 1),
            Face::Right => IVec3::new(1, 0, 0),
            Face::Left => IVec3::new(-1, 0, 0),
            Face::Top => IVec3::new(0, 1, 0),
            Face::Bottom => IVec3::new(0, -1, 0),
            Face::None => IVec3::ZERO,
        }
    }

    /// Outward unit normal; zero for [`Face::None`]
    pub fn outward_normal(self) -> Vec3 {
        self.offset().as_vec3()
    }

    /// Face whose outward normal matches `normal` (axis-aligned, unit length)
    pub fn from_normal(normal: Vec3) -> Face {
        Face::ALL
            .into_iter()
            .find(|face| face.outward_normal().distance_squared(normal) < 1e-6)
            .unwrap_or(Face::None)
    }
}
