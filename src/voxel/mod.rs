//! Voxel scene data and editing tools

pub mod face;
pub mod scene;
pub mod palette;
pub mod brush;

pub use face::Face;
pub use scene::{EditSink, EditStats, EntityId, VoxelScene, VoxelStore};
pub use palette::Palette;
pub use brush::{BrushEngine, BrushGesture, BrushMode, BrushUsage, EditKind, VoxelEdit};
