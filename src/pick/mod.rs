//! Cursor picking: id-buffer lookup with a grid raycast fallback

pub mod id_color;
pub mod id_buffer;
pub mod bounds;
pub mod resolver;

pub use id_color::IdPixel;
pub use id_buffer::{IdBuffer, IdBufferSource};
pub use bounds::{BoundingPlanes, GridPlane};
pub use resolver::{HitResolver, HoverTarget, PickInput};
