//! Geometry primitives for picking

pub mod aabb;
pub mod ray;
pub mod plane;
pub mod grid;

pub use aabb::Aabb;
pub use ray::Ray;
pub use plane::Plane;
pub use grid::round_to_voxel;
