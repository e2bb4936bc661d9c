//! Per-frame brush update

use crate::core::types::IVec3;
use crate::pick::HoverTarget;
use super::gesture::{BrushGesture, BrushMode, VoxelEdit};

/// Turns the hovered target into voxel edits, frame by frame.
///
/// Keeps the cells touched by the current gesture: the voxel brush uses them
/// to skip cells it already edited, the box brush keeps its anchor corner in
/// the first slot. Cleared whenever the brush is idle.
#[derive(Debug, Clone, Default)]
pub struct BrushEngine {
    touched: Vec<IVec3>,
}

impl BrushEngine {
    pub fn new() -> Self {
        Self { touched: Vec::new() }
    }

    /// Cells recorded for the current gesture
    pub fn touched(&self) -> &[IVec3] {
        &self.touched
    }

    /// Box anchor of the current gesture, once captured
    pub fn anchor(&self) -> Option<IVec3> {
        self.touched.first().copied()
    }

    /// Edits for this frame, in application order.
    ///
    /// Empty unless the button is held and something is hovered. In box mode
    /// the result is the whole region for the gesture so far and supersedes
    /// the previous frame's output.
    pub fn update(&mut self, hover: &HoverTarget, gesture: &BrushGesture) -> Vec<VoxelEdit> {
        if !gesture.started && !self.touched.is_empty() {
            log::debug!("Brush released, forgetting {} touched cells", self.touched.len());
            self.touched.clear();
        }

        if !gesture.started || !hover.exists {
            return Vec::new();
        }

        match gesture.mode {
            BrushMode::Voxel => self.voxel_brush(hover, gesture),
            BrushMode::Box => self.box_brush(hover, gesture),
        }
    }

    fn voxel_brush(&mut self, hover: &HoverTarget, gesture: &BrushGesture) -> Vec<VoxelEdit> {
        let cell = target_cell(hover);

        if self.touched.contains(&cell) {
            log::trace!("Voxel brush already touched {} this gesture", cell);
            return Vec::new();
        }

        self.touched.push(cell);
        vec![VoxelEdit { position: cell, kind: gesture.usage }]
    }

    fn box_brush(&mut self, hover: &HoverTarget, gesture: &BrushGesture) -> Vec<VoxelEdit> {
        let end = target_cell(hover);
        let start = match self.anchor() {
            Some(anchor) => anchor,
            None => {
                log::debug!("Box brush anchored at {}", end);
                self.touched.push(end);
                end
            }
        };

        let min = start.min(end);
        let max = start.max(end);
        let extent = (max - min + IVec3::ONE).as_uvec3();

        let mut edits = Vec::with_capacity((extent.x * extent.y * extent.z) as usize);
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    edits.push(VoxelEdit { position: IVec3::new(x, y, z), kind: gesture.usage });
                }
            }
        }
        edits
    }
}

/// Cell a hover target points the brush at: the neighbour across the hit face
/// for existing voxels, the grid cell itself for empty space.
fn target_cell(hover: &HoverTarget) -> IVec3 {
    if hover.is_existing_voxel {
        hover.position + hover.face.offset()
    } else {
        hover.position
    }
}
