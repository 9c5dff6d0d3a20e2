use npc_core::{EntityId, WorldMut, WorldView};

use crate::EffectRef;

/// Resolve an opaque entity handle.
///
/// Resolution never errors for a merely-missing component: queries answer
/// `false`/`None` for stale or deleted handles and callers fail closed.
pub trait EntityWorldView: WorldView {
    /// Live and not queued for deletion.
    fn is_alive(&self, entity: EntityId) -> bool;

    fn has_tag(&self, entity: EntityId, tag: &str) -> bool;
}

/// Storage container access.
pub trait StorageWorldView: EntityWorldView {
    /// Contents of the entity's storage container; `None` when the entity
    /// has no container at all.
    fn contained_items(&self, entity: EntityId) -> Option<Vec<EntityId>>;

    fn has_space(&self, entity: EntityId) -> bool;

    /// Capacity/size check for one specific item.
    fn can_insert(&self, storage: EntityId, item: EntityId) -> bool;

    /// Whitelist check, independent of capacity.
    fn allows_item(&self, storage: EntityId, item: EntityId) -> bool;

    /// Whether the entity exposes an accessible disposal container.
    fn is_receptacle(&self, entity: EntityId) -> bool;
}

pub trait StorageWorldMut: WorldMut + StorageWorldView {
    fn remove_item(&mut self, from: EntityId, item: EntityId) -> bool;

    fn insert_item(&mut self, into: EntityId, item: EntityId) -> bool;
}

/// Bounded spatial queries.
pub trait LookupWorldView: EntityWorldView {
    fn entities_in_range(&self, origin: EntityId, range: f32) -> Vec<EntityId>;

    fn is_on_ground(&self, entity: EntityId) -> bool;
}

/// One-shot cue playback, anchored at a source entity.
pub trait EffectsWorldMut: WorldMut {
    fn play_effect(&mut self, effect: &EffectRef, source: EntityId);
}
