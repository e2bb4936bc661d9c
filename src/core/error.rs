//! Error types for the editor core

use thiserror::Error;

use crate::core::types::IVec3;
use crate::voxel::EntityId;

/// Main error type for the editor core
#[derive(Debug, Error)]
pub enum Error {
    /// The id buffer encoded an entity the voxel store does not know about.
    #[error("Entity {0} is not present in the voxel store")]
    UnknownEntity(EntityId),

    /// The id buffer alpha channel held a value outside the face table.
    #[error("Unknown face code {0} in id buffer")]
    UnknownFaceCode(u8),

    #[error("Voxel position {0} is outside the edit volume")]
    OutOfBounds(IVec3),

    #[error("Pick id space exhausted")]
    PickIdsExhausted,

    #[error("Id buffer size mismatch: expected {expected} bytes, got {actual}")]
    IdBufferSize { expected: usize, actual: usize },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
