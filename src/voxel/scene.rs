//! Voxel entity store
//!
//! Every placed voxel is a `hecs` entity carrying its grid position, palette
//! material and the pick id the id buffer encodes it with.

use std::collections::HashMap;
use std::fmt;

use crate::core::types::{IVec3, Result};
use crate::core::Error;
use crate::pick::id_color::MAX_ENTITY_ID;
use super::brush::{BrushUsage, VoxelEdit};

/// Opaque voxel identifier, the value encoded into the id buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl EntityId {
    /// "No entity" sentinel; encodes as black in the id buffer.
    pub const NULL: EntityId = EntityId(0);

    pub fn is_null(self) -> bool {
        self == Self::NULL
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Grid position component
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transform {
    pub position: IVec3,
}

/// Palette material component
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Material {
    pub index: u8,
}

/// Pick id component
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickId(pub EntityId);

/// Read access the hit resolver needs from the store.
pub trait VoxelStore {
    /// Position of a voxel by id. An unknown id is an invariant violation:
    /// the id buffer only ever encodes live voxels.
    fn voxel_position(&self, id: EntityId) -> Result<IVec3>;
}

/// Counts of what an edit batch did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EditStats {
    pub added: usize,
    pub removed: usize,
    pub painted: usize,
    /// Out of bounds, or nothing to do (add on occupied, remove/paint on empty)
    pub skipped: usize,
}

impl EditStats {
    /// Number of edits that changed the scene
    pub fn changed(&self) -> usize {
        self.added + self.removed + self.painted
    }

    pub fn merge(&mut self, other: EditStats) {
        self.added += other.added;
        self.removed += other.removed;
        self.painted += other.painted;
        self.skipped += other.skipped;
    }
}

/// Consumer of brush output: creates, destroys and recolours voxels.
pub trait EditSink {
    fn apply_edits(&mut self, edits: &[VoxelEdit], material: u8) -> Result<EditStats>;
}

/// The voxel scene: an edit volume of `0..=grid_size` on every axis.
pub struct VoxelScene {
    world: hecs::World,
    grid_size: i32,
    by_id: HashMap<EntityId, hecs::Entity>,
    by_position: HashMap<IVec3, EntityId>,
    next_pick_id: u32,
    free_pick_ids: Vec<u32>,
}

impl VoxelScene {
    pub fn new(grid_size: i32) -> Self {
        Self {
            world: hecs::World::new(),
            grid_size,
            by_id: HashMap::new(),
            by_position: HashMap::new(),
            next_pick_id: 1,
            free_pick_ids: Vec::new(),
        }
    }

    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Whether `position` lies inside the edit volume
    pub fn in_bounds(&self, position: IVec3) -> bool {
        position.cmpge(IVec3::ZERO).all() && position.cmple(IVec3::splat(self.grid_size)).all()
    }

    /// Voxel occupying `position`, if any
    pub fn entity_at(&self, position: IVec3) -> Option<EntityId> {
        self.by_position.get(&position).copied()
    }

    pub fn position_of(&self, id: EntityId) -> Result<IVec3> {
        let entity = self.entity(id)?;
        let transform = self.world.get::<&Transform>(entity)
            .map_err(|_| Error::UnknownEntity(id))?;
        Ok(transform.position)
    }

    pub fn material_of(&self, id: EntityId) -> Result<u8> {
        let entity = self.entity(id)?;
        let material = self.world.get::<&Material>(entity)
            .map_err(|_| Error::UnknownEntity(id))?;
        Ok(material.index)
    }

    /// Place a voxel. Returns the existing id if the cell is already taken.
    pub fn spawn_voxel(&mut self, position: IVec3, material: u8) -> Result<EntityId> {
        if !self.in_bounds(position) {
            return Err(Error::OutOfBounds(position));
        }
        if let Some(existing) = self.entity_at(position) {
            return Ok(existing);
        }

        let id = self.allocate_pick_id()?;
        let entity = self.world.spawn((
            Transform { position },
            Material { index: material },
            PickId(id),
        ));
        self.by_id.insert(id, entity);
        self.by_position.insert(position, id);
        Ok(id)
    }

    /// Remove the voxel at `position`. Returns whether one was there.
    pub fn remove_voxel(&mut self, position: IVec3) -> bool {
        let Some(id) = self.by_position.remove(&position) else {
            return false;
        };
        if let Some(entity) = self.by_id.remove(&id) {
            // The maps and the world are only mutated together, so the entity is live
            let _ = self.world.despawn(entity);
        }
        self.free_pick_ids.push(id.0);
        true
    }

    /// Recolour the voxel at `position`. Returns whether its material changed.
    pub fn paint_voxel(&mut self, position: IVec3, material: u8) -> bool {
        let Some(entity) = self.entity_at(position).and_then(|id| self.by_id.get(&id).copied()) else {
            return false;
        };
        match self.world.get::<&mut Material>(entity) {
            Ok(mut current) if current.index != material => {
                current.index = material;
                true
            }
            _ => false,
        }
    }

    /// Snapshot of every voxel as (id, position, material)
    pub fn voxels(&self) -> Vec<(EntityId, IVec3, u8)> {
        let mut query = self.world.query::<(&PickId, &Transform, &Material)>();
        let voxels = query
            .iter()
            .map(|(_, (pick, transform, material))| (pick.0, transform.position, material.index))
            .collect();
        voxels
    }

    fn entity(&self, id: EntityId) -> Result<hecs::Entity> {
        self.by_id.get(&id).copied().ok_or(Error::UnknownEntity(id))
    }

    fn allocate_pick_id(&mut self) -> Result<EntityId> {
        if let Some(id) = self.free_pick_ids.pop() {
            return Ok(EntityId(id));
        }
        if self.next_pick_id > MAX_ENTITY_ID {
            return Err(Error::PickIdsExhausted);
        }
        let id = self.next_pick_id;
        self.next_pick_id += 1;
        Ok(EntityId(id))
    }
}

impl VoxelStore for VoxelScene {
    fn voxel_position(&self, id: EntityId) -> Result<IVec3> {
        self.position_of(id)
    }
}

impl EditSink for VoxelScene {
    fn apply_edits(&mut self, edits: &[VoxelEdit], material: u8) -> Result<EditStats> {
        let mut stats = EditStats::default();

        for edit in edits {
            if !self.in_bounds(edit.position) {
                log::debug!("Skipping {:?} outside the edit volume at {}", edit.kind, edit.position);
                stats.skipped += 1;
                continue;
            }

            let changed = match edit.kind {
                BrushUsage::Add => {
                    if self.entity_at(edit.position).is_some() {
                        false
                    } else {
                        self.spawn_voxel(edit.position, material)?;
                        stats.added += 1;
                        true
                    }
                }
                BrushUsage::Remove => {
                    let removed = self.remove_voxel(edit.position);
                    stats.removed += removed as usize;
                    removed
                }
                BrushUsage::Paint => {
                    let painted = self.paint_voxel(edit.position, material);
                    stats.painted += painted as usize;
                    painted
                }
            };

            if !changed {
                stats.skipped += 1;
            }
        }

        if stats.changed() > 0 {
            log::info!(
                "Applied edits: +{} -{} ~{} ({} skipped), {} voxels in scene",
                stats.added, stats.removed, stats.painted, stats.skipped, self.len()
            );
        }
        Ok(stats)
    }
}
