//! Cube Beast - picking and brush core of a voxel editor
//!
//! Each frame the editor works out what the cursor is over (an existing
//! voxel from the object-id buffer, or an empty cell on the walls of the
//! edit volume) and turns the active brush gesture into voxel edits.

pub mod core;
pub mod math;
pub mod voxel;
pub mod pick;
pub mod editor;
