//! Colour palette and the material selected for new voxels

use crate::core::types::Result;
use crate::core::Error;

/// Default swatches, RGB888
pub const DEFAULT_COLORS: [[u8; 3]; 8] = [
    [236, 236, 236],
    [54, 54, 62],
    [214, 72, 62],
    [236, 168, 58],
    [238, 220, 92],
    [92, 178, 88],
    [64, 132, 214],
    [150, 96, 186],
];

/// Ordered colour list; a voxel's material is an index into it.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<[u8; 3]>,
    selected: u8,
}

impl Palette {
    /// Build from a colour list (1 to 256 entries)
    pub fn new(colors: Vec<[u8; 3]>) -> Result<Self> {
        if colors.is_empty() || colors.len() > 256 {
            return Err(Error::InvalidConfig(format!(
                "palette needs 1 to 256 colors, got {}", colors.len()
            )));
        }
        Ok(Self { colors, selected: 0 })
    }

    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Material index new and painted voxels get
    pub fn selected(&self) -> u8 {
        self.selected
    }

    pub fn select(&mut self, index: u8) -> Result<()> {
        if usize::from(index) >= self.colors.len() {
            return Err(Error::InvalidConfig(format!(
                "palette index {} out of range ({} colors)", index, self.colors.len()
            )));
        }
        self.selected = index;
        Ok(())
    }

    /// Colour of a material, if the palette has it
    pub fn color(&self, index: u8) -> Option<[u8; 3]> {
        self.colors.get(usize::from(index)).copied()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self { colors: DEFAULT_COLORS.to_vec(), selected: 0 }
    }
}
