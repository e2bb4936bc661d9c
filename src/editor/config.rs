//! Editor configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::types::{Result, UVec2};
use crate::core::Error;
use crate::voxel::palette::DEFAULT_COLORS;
use crate::voxel::{BrushMode, BrushUsage, Palette};

/// Largest supported edit volume edge
const MAX_GRID_SIZE: i32 = 255;

/// Largest viewport edge in pixels, the usual GPU texture limit
const MAX_VIEWPORT_DIM: u32 = 16_384;

/// Startup settings for an [`Editor`](super::Editor)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Edit volume covers coordinates `0..=grid_size` on each axis
    pub grid_size: i32,
    /// Initial viewport size in pixels
    pub viewport: [u32; 2],
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub palette: Vec<[u8; 3]>,
    pub brush_mode: BrushMode,
    pub brush_usage: BrushUsage,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: 9,
            viewport: [800, 500],
            fov_degrees: 60.0,
            palette: DEFAULT_COLORS.to_vec(),
            brush_mode: BrushMode::Voxel,
            brush_usage: BrushUsage::Add,
        }
    }
}

impl EditorConfig {
    pub fn viewport_size(&self) -> UVec2 {
        UVec2::from_array(self.viewport)
    }

    pub fn build_palette(&self) -> Result<Palette> {
        Palette::new(self.palette.clone())
    }

    /// Reject settings the editor cannot run with
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(Error::InvalidConfig(format!(
                "grid_size must be in 1..={}, got {}", MAX_GRID_SIZE, self.grid_size
            )));
        }
        if self.viewport.iter().any(|&dim| dim == 0 || dim > MAX_VIEWPORT_DIM) {
            return Err(Error::InvalidConfig(format!(
                "viewport must be 1..={} on each side, got {}x{}",
                MAX_VIEWPORT_DIM, self.viewport[0], self.viewport[1]
            )));
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(Error::InvalidConfig(format!(
                "fov_degrees must be in (0, 180), got {}", self.fov_degrees
            )));
        }
        self.build_palette().map(|_| ())
    }

    /// Save to file (sync)
    pub fn save_sync(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        log::debug!("Saved editor config to {}", path.display());
        Ok(())
    }

    /// Load and validate from file (sync)
    pub fn load_sync(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        log::info!("Loaded editor config from {} (grid {})", path.display(), config.grid_size);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_is_valid() {
        let config = EditorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_size, 9);
        assert_eq!(config.viewport_size(), UVec2::new(800, 500));
        assert_eq!(config.build_palette().unwrap().len(), 8);
    }

    #[test]
    fn test_validate_rejects() {
        let bad = [
            EditorConfig { grid_size: 0, ..Default::default() },
            EditorConfig { grid_size: 256, ..Default::default() },
            EditorConfig { viewport: [0, 500], ..Default::default() },
            EditorConfig { viewport: [70_000, 70_000], ..Default::default() },
            EditorConfig { viewport: [800, 16_385], ..Default::default() },
            EditorConfig { fov_degrees: 0.0, ..Default::default() },
            EditorConfig { palette: Vec::new(), ..Default::default() },
            EditorConfig { palette: vec![[0, 0, 0]; 257], ..Default::default() },
        ];
        for config in bad {
            assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))), "{:?}", config.grid_size);
        }
    }

    #[test]
    fn test_viewport_limit_is_inclusive() {
        let config = EditorConfig { viewport: [16_384, 16_384], ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_persistence() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join("editor.json");

        let config = EditorConfig {
            grid_size: 15,
            brush_mode: BrushMode::Box,
            brush_usage: BrushUsage::Paint,
            ..Default::default()
        };
        config.save_sync(&path).expect("save failed");

        let loaded = EditorConfig::load_sync(&path).expect("load failed");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("editor.json");
        std::fs::write(&path, r#"{ "grid_size": 4, "brush_mode": "box" }"#).unwrap();

        let loaded = EditorConfig::load_sync(&path).unwrap();
        assert_eq!(loaded.grid_size, 4);
        assert_eq!(loaded.brush_mode, BrushMode::Box);
        assert_eq!(loaded.viewport, [800, 500]);
    }

    #[test]
    fn test_load_errors() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let missing = EditorConfig::load_sync(&temp_dir.path().join("missing.json"));
        assert!(matches!(missing, Err(Error::Io(_))));

        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ grid_size").unwrap();
        assert!(matches!(EditorConfig::load_sync(&path), Err(Error::Json(_))));

        std::fs::write(&path, r#"{ "grid_size": -3 }"#).unwrap();
        assert!(matches!(EditorConfig::load_sync(&path), Err(Error::InvalidConfig(_))));
    }
}
