//! Object-id image read by the hit resolver

use crate::core::types::{Result, UVec2, Vec2};
use crate::core::{CameraProvider, Error};
use crate::math::{Aabb, Ray};
use crate::voxel::{EntityId, Face, VoxelScene};
use super::id_color::IdPixel;

/// Where the resolver reads id pixels from.
///
/// Coordinates follow framebuffer convention: row 0 is the bottom row.
pub trait IdBufferSource {
    /// Image size in pixels
    fn size(&self) -> UVec2;

    /// Pixel at (x, y). Reads outside the image return [`IdPixel::NULL`].
    fn read_pixel(&self, x: u32, y: u32) -> IdPixel;
}

/// CPU-side id image
#[derive(Clone, Debug)]
pub struct IdBuffer {
    size: UVec2,
    pixels: Vec<IdPixel>,
}

impl IdBuffer {
    /// Cleared (all null) buffer
    pub fn new(size: UVec2) -> Self {
        Self {
            size,
            pixels: vec![IdPixel::NULL; pixel_count(size)],
        }
    }

    /// Wrap a tightly packed RGBA8 readback, bottom row first
    pub fn from_rgba_bytes(size: UVec2, bytes: &[u8]) -> Result<Self> {
        let expected = pixel_count(size) * std::mem::size_of::<IdPixel>();
        if bytes.len() != expected {
            return Err(Error::IdBufferSize { expected, actual: bytes.len() });
        }
        Ok(Self {
            size,
            pixels: bytemuck::cast_slice(bytes).to_vec(),
        })
    }

    /// Reset every pixel to null
    pub fn clear(&mut self) {
        self.pixels.fill(IdPixel::NULL);
    }

    /// Resize, clearing contents
    pub fn resize(&mut self, size: UVec2) {
        self.size = size;
        self.pixels = vec![IdPixel::NULL; pixel_count(size)];
    }

    /// Write one pixel; out-of-range writes are ignored
    pub fn write(&mut self, x: u32, y: u32, id: EntityId, face: Face) {
        if let Some(index) = self.index(x, y) {
            self.pixels[index] = IdPixel::new(id, face);
        }
    }

    /// Raw RGBA8 bytes, bottom row first
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Software id pass: cast a ray through each pixel centre and record
    /// the nearest voxel and the face the ray enters through.
    pub fn render_scene(&mut self, scene: &VoxelScene, camera: &dyn CameraProvider) {
        let inverse_view_proj = camera.view_projection_inverse();
        let cells: Vec<(EntityId, Aabb)> = scene
            .voxels()
            .into_iter()
            .map(|(id, position, _)| (id, Aabb::voxel_cell(position)))
            .collect();
        let size = self.size.as_vec2();

        for y in 0..self.size.y {
            for x in 0..self.size.x {
                let ndc = Vec2::new(
                    (x as f32 + 0.5) / size.x * 2.0 - 1.0,
                    (y as f32 + 0.5) / size.y * 2.0 - 1.0,
                );
                let ray = Ray::unproject(ndc, &inverse_view_proj);

                let nearest = cells
                    .iter()
                    .filter_map(|(id, cell)| ray.intersects_aabb(cell).map(|(t, _)| (t, *id, cell)))
                    .min_by(|a, b| a.0.total_cmp(&b.0));

                let pixel = match nearest {
                    Some((t, id, cell)) => {
                        let face = Face::from_normal(cell.dominant_normal(ray.at(t)));
                        IdPixel::new(id, face)
                    }
                    None => IdPixel::NULL,
                };
                let index = y as usize * self.size.x as usize + x as usize;
                self.pixels[index] = pixel;
            }
        }
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.size.x && y < self.size.y).then(|| y as usize * self.size.x as usize + x as usize)
    }
}

// Widened before multiplying: width * height can exceed u32
fn pixel_count(size: UVec2) -> usize {
    size.x as usize * size.y as usize
}

impl IdBufferSource for IdBuffer {
    fn size(&self) -> UVec2 {
        self.size
    }

    fn read_pixel(&self, x: u32, y: u32) -> IdPixel {
        self.index(x, y).map_or(IdPixel::NULL, |index| self.pixels[index])
    }
}
