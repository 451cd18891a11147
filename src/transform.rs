//! World-transform table for camera placement
//!
//! Cameras do not own their world transform. They hold an [`Entity`] key and
//! read and write placement through a [`TransformManager`], so the same
//! transform can be driven by whatever else owns the entity (a scene graph,
//! an animation rig, gameplay code).

use glam::DMat4;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

/// Opaque handle to an object that can carry a world transform.
///
/// Entities are minted by the caller. The manager uses them purely as lookup
/// keys and never interprets the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity(u32);

impl Entity {
    /// Create an entity handle from a raw id.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw id this handle was created with.
    pub const fn id(self) -> u32 {
        self.0
    }
}

new_key_type! {
    /// Stable key for a transform slot inside a [`TransformManager`]
    pub struct TransformInstance;
}

/// Double-precision world-transform storage, keyed by entity.
///
/// All operations are total: reading through a stale or default instance key
/// returns identity, writing through one is ignored.
#[derive(Debug, Default)]
pub struct TransformManager {
    /// Entity to instance index
    instances: FxHashMap<Entity, TransformInstance>,

    /// Transform storage
    transforms: SlotMap<TransformInstance, DMat4>,
}

impl TransformManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== INSTANCES =====

    /// Instance key for `entity`, creating an identity transform slot if the
    /// entity has none yet.
    pub fn get_or_create_instance(&mut self, entity: Entity) -> TransformInstance {
        if let Some(&instance) = self.instances.get(&entity) {
            return instance;
        }
        let instance = self.transforms.insert(DMat4::IDENTITY);
        self.instances.insert(entity, instance);
        instance
    }

    /// Instance key for `entity`, if one has been created.
    pub fn instance(&self, entity: Entity) -> Option<TransformInstance> {
        self.instances.get(&entity).copied()
    }

    // ===== TRANSFORMS =====

    /// Set the world transform for an instance.
    ///
    /// Writes through a stale key are ignored.
    pub fn set_transform(&mut self, instance: TransformInstance, transform: DMat4) {
        if let Some(slot) = self.transforms.get_mut(instance) {
            *slot = transform;
        }
    }

    /// Exact double-precision world transform for an instance.
    ///
    /// This is the authoritative value, as opposed to any interpolated or
    /// reduced-precision copy a renderer may keep. Stale keys read as
    /// identity.
    pub fn world_transform_accurate(&self, instance: TransformInstance) -> DMat4 {
        self.transforms
            .get(instance)
            .copied()
            .unwrap_or(DMat4::IDENTITY)
    }

    /// Remove an entity and free its transform slot.
    ///
    /// Unknown entities are ignored. Instance keys handed out for the entity
    /// become stale.
    pub fn destroy(&mut self, entity: Entity) {
        if let Some(instance) = self.instances.remove(&entity) {
            self.transforms.remove(instance);
        }
    }

    /// Number of live transform slots.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// True if no entity has a transform slot.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
