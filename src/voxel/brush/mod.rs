//! Brush tools that turn the hovered target into voxel edits
//!
//! A gesture runs from button press to release. The voxel brush edits one
//! cell at a time, the box brush fills the cuboid between the cell the
//! gesture started on and the one currently hovered.

pub mod gesture;
pub mod engine;

// Re-exports
pub use gesture::{BrushGesture, BrushMode, BrushUsage, EditKind, VoxelEdit};
pub use engine::BrushEngine;
