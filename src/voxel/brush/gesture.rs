//! Brush tool state and edit representation

use serde::{Deserialize, Serialize};

use crate::core::types::IVec3;

/// Which brush is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrushMode {
    #[default]
    Voxel, // One cell per frame
    Box,   // Cuboid from the gesture anchor to the hovered cell
}

/// What the brush does to the cells it touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrushUsage {
    #[default]
    Add,    // Create voxels in empty cells
    Remove, // Destroy voxels
    Paint,  // Recolour existing voxels
}

/// Kind of an emitted edit; always the usage of the brush that produced it
pub type EditKind = BrushUsage;

/// One cell to mutate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoxelEdit {
    pub position: IVec3,
    pub kind: EditKind,
}

/// Brush state for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrushGesture {
    /// Button held (level, not edge)
    pub started: bool,
    pub mode: BrushMode,
    pub usage: BrushUsage,
}

impl BrushGesture {
    pub fn new(mode: BrushMode, usage: BrushUsage) -> Self {
        Self { started: false, mode, usage }
    }

    /// Copy with the button state replaced (builder pattern)
    pub fn with_started(mut self, started: bool) -> Self {
        self.started = started;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&BrushMode::Box).unwrap(), "\"box\"");
        let usage: BrushUsage = serde_json::from_str("\"paint\"").unwrap();
        assert_eq!(usage, BrushUsage::Paint);
    }

    #[test]
    fn test_edits_dedupe_in_set() {
        let edit = VoxelEdit { position: IVec3::new(1, 2, 3), kind: BrushUsage::Paint };
        let set: std::collections::HashSet<VoxelEdit> = [edit, edit].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_with_started() {
        let gesture = BrushGesture::new(BrushMode::Box, BrushUsage::Remove).with_started(true);
        assert!(gesture.started);
        assert_eq!(gesture.mode, BrushMode::Box);
        assert_eq!(gesture.usage, BrushUsage::Remove);
    }
}
