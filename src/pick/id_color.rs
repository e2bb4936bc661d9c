//! Id-buffer pixel protocol
//!
//! The geometry pass writes, for every covered pixel, the id of the voxel in
//! RGB and the visible face in alpha. The resolver reads one pixel back.
//! Both sides go through this module.

use bytemuck::{Pod, Zeroable};

use crate::core::types::Result;
use crate::core::Error;
use crate::voxel::{EntityId, Face};

/// Largest id that fits in 24 bits of RGB
pub const MAX_ENTITY_ID: u32 = 0x00FF_FFFF;

/// Face for each alpha code; index 7 is reserved and never written.
const FACE_CODES: [Option<Face>; 8] = [
    Some(Face::None),
    Some(Face::Back),
    Some(Face::Right),
    Some(Face::Top),
    Some(Face::Front),
    Some(Face::Left),
    Some(Face::Bottom),
    None,
];

/// Pack an id into RGB, little-endian (`r | g << 8 | b << 16`).
/// Ids above [`MAX_ENTITY_ID`] are truncated to 24 bits.
pub fn encode_entity(id: EntityId) -> [u8; 3] {
    let [r, g, b, _] = id.0.to_le_bytes();
    [r, g, b]
}

/// Unpack an id; black decodes to [`EntityId::NULL`].
pub fn decode_entity(rgb: [u8; 3]) -> EntityId {
    EntityId(u32::from_le_bytes([rgb[0], rgb[1], rgb[2], 0]))
}

/// Alpha code for a face
pub fn encode_face(face: Face) -> u8 {
    match face {
        Face::None => 0,
        Face::Back => 1,
        Face::Right => 2,
        Face::Top => 3,
        Face::Front => 4,
        Face::Left => 5,
        Face::Bottom => 6,
    }
}

/// Face for an alpha code; 7 and above are invariant violations.
pub fn decode_face(code: u8) -> Result<Face> {
    FACE_CODES
        .get(usize::from(code))
        .copied()
        .flatten()
        .ok_or(Error::UnknownFaceCode(code))
}

/// One RGBA8 id-buffer texel, layout-compatible with a GPU readback
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct IdPixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl IdPixel {
    /// Pixel not covered by any voxel
    pub const NULL: IdPixel = IdPixel { r: 0, g: 0, b: 0, a: 0 };

    pub fn new(id: EntityId, face: Face) -> Self {
        let [r, g, b] = encode_entity(id);
        Self { r, g, b, a: encode_face(face) }
    }

    pub fn entity(&self) -> EntityId {
        decode_entity([self.r, self.g, self.b])
    }

    pub fn face(&self) -> Result<Face> {
        decode_face(self.a)
    }
}
