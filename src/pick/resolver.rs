//! Hit resolver: what the cursor points at this frame
//!
//! The id buffer is consulted first; a covered pixel means an existing voxel
//! and wins outright. Otherwise the cursor ray is intersected with the walls
//! of the edit volume to find the empty cell under it.

use crate::core::types::{IVec3, Result, UVec2, Vec2};
use crate::core::{CameraProvider, InputState};
use crate::math::{round_to_voxel, Ray};
use crate::voxel::{EntityId, Face, VoxelStore};
use super::bounds::BoundingPlanes;
use super::id_buffer::IdBufferSource;
use super::id_color::IdPixel;

/// Slack on the inclusive `[0, N]` test so wall hits computed a few ulps
/// outside the volume still count.
const GRID_EPSILON: f32 = 1e-4;

/// The edit-relevant thing under the cursor, recomputed every frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverTarget {
    /// Anything under the cursor at all
    pub exists: bool,
    /// Existing voxel (object hit) rather than an empty grid cell
    pub is_existing_voxel: bool,
    /// Voxel face struck, or the wall's face identity for grid hits
    pub face: Face,
    /// Voxel coordinate, or the rounded wall intersection
    pub position: IVec3,
    /// Hit voxel; null for grid hits
    pub entity: EntityId,
}

impl HoverTarget {
    /// Nothing hovered
    pub fn none() -> Self {
        Self::default()
    }

    /// Existing voxel hovered on `face`
    pub fn voxel(entity: EntityId, position: IVec3, face: Face) -> Self {
        Self {
            exists: true,
            is_existing_voxel: true,
            face,
            position,
            entity,
        }
    }

    /// Empty cell on a bounding wall
    pub fn grid(position: IVec3, face: Face) -> Self {
        Self {
            exists: true,
            is_existing_voxel: false,
            face,
            position,
            entity: EntityId::NULL,
        }
    }
}

/// Cursor state the resolver reads
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickInput {
    /// Viewport-local pixels, origin top-left
    pub mouse_position: Vec2,
    /// Normalized device coordinates, Y up
    pub ndc: Vec2,
    pub viewport_size: UVec2,
}

impl PickInput {
    pub fn from_input(input: &InputState) -> Self {
        Self {
            mouse_position: input.mouse_position(),
            ndc: input.ndc_mouse_position(),
            viewport_size: input.viewport_size(),
        }
    }
}

/// Resolves the cursor into a [`HoverTarget`]
#[derive(Clone, Debug)]
pub struct HitResolver {
    planes: BoundingPlanes,
}

impl HitResolver {
    pub fn new(grid_size: i32) -> Self {
        Self { planes: BoundingPlanes::new(grid_size) }
    }

    pub fn planes(&self) -> &BoundingPlanes {
        &self.planes
    }

    /// Resolve this frame's hover target.
    ///
    /// Fails if the id buffer names a voxel the store does not have, or
    /// carries an unknown face code; both mean producer and store disagree.
    pub fn resolve(
        &self,
        input: &PickInput,
        id_buffer: &dyn IdBufferSource,
        store: &dyn VoxelStore,
        camera: &dyn CameraProvider,
    ) -> Result<HoverTarget> {
        let pixel = self.sample(input, id_buffer);
        let entity = pixel.entity();

        if !entity.is_null() {
            let face = pixel.face()
                .inspect_err(|e| log::error!("Id buffer pixel for {}: {}", entity, e))?;
            let position = store.voxel_position(entity)
                .inspect_err(|e| log::error!("Hovered voxel lookup failed: {}", e))?;
            let target = HoverTarget::voxel(entity, position, face);
            log::trace!("Hovering voxel {} at {} ({:?})", entity, position, face);
            return Ok(target);
        }

        Ok(self.raycast_grid(input.ndc, camera))
    }

    /// Grid-only resolution: unproject `ndc` and cast against the walls.
    pub fn raycast_grid(&self, ndc: Vec2, camera: &dyn CameraProvider) -> HoverTarget {
        let ray = Ray::unproject(ndc, &camera.view_projection_inverse());
        self.cast(&ray)
    }

    /// First wall, in table order, whose hit lies inside the volume.
    pub fn cast(&self, ray: &Ray) -> HoverTarget {
        for wall in self.planes.planes() {
            let Some(point) = wall.plane.intersect_segment(ray) else {
                continue;
            };
            if self.planes.bounds().contains_point_eps(point, GRID_EPSILON) {
                let position = round_to_voxel(point);
                log::debug!("Grid hit on {:?} wall at {} -> {}", wall.face, point, position);
                return HoverTarget::grid(position, wall.face);
            }
        }
        log::trace!("Cursor ray misses the edit volume");
        HoverTarget::none()
    }

    /// Read the id pixel under the cursor. The buffer is bottom-origin, so
    /// the row is `viewport_height - floor(mouse_y)`; the top screen row maps
    /// one past the last buffer row and is clamped onto it.
    ///
    /// Below the top row this reads one row above the pixel the NDC ray goes
    /// through (that one is `viewport_height - 1 - floor(mouse_y)`). The
    /// offset is intentional.
    fn sample(&self, input: &PickInput, id_buffer: &dyn IdBufferSource) -> IdPixel {
        let x = input.mouse_position.x.floor();
        let y = input.viewport_size.y as f32 - input.mouse_position.y.floor();
        if x < 0.0 || y < 0.0 {
            return IdPixel::NULL;
        }

        let last_row = id_buffer.size().y.saturating_sub(1);
        id_buffer.read_pixel(x as u32, (y as u32).min(last_row))
    }
}
