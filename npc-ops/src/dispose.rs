use npc_core::{Blackboard, EntityId, Operator, OperatorStatus, TickContext};

use crate::{ConfigError, EffectRef, EffectsWorldMut, StorageWorldMut};

/// Default blackboard key naming the disposal receptacle.
pub const DEFAULT_DISPOSAL_KEY: &str = "DisposalUnit";

/// Empties every item from the owner's storage into a disposal receptacle
/// named by the blackboard.
///
/// The drain is best-effort: each item's move is independent, and a single
/// failure does not abort the rest. The target is validated before any item
/// is touched, so an invalid target leaves the source unchanged.
#[derive(Debug, Clone)]
pub struct DisposeOperator {
    target_key: String,
    dump_effect: Option<EffectRef>,
}

impl DisposeOperator {
    pub fn new(
        target_key: impl Into<String>,
        dump_effect: Option<EffectRef>,
    ) -> Result<Self, ConfigError> {
        let target_key = target_key.into();
        if target_key.is_empty() {
            return Err(ConfigError::MissingParameter("target_key"));
        }

        Ok(Self {
            target_key,
            dump_effect,
        })
    }

    pub fn target_key(&self) -> &str {
        &self.target_key
    }
}

impl<W> Operator<W> for DisposeOperator
where
    W: StorageWorldMut + EffectsWorldMut + 'static,
{
    fn update(
        &self,
        _ctx: &TickContext,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> OperatorStatus {
        let Some(owner) = blackboard.owner() else {
            return OperatorStatus::Failed;
        };

        // Nothing to move is completion, not failure.
        let items = match world.contained_items(owner) {
            Some(items) if !items.is_empty() => items,
            _ => return OperatorStatus::Finished,
        };

        let Some(target) = blackboard.get::<EntityId>(&self.target_key) else {
            return OperatorStatus::Failed;
        };

        if !world.is_alive(target) {
            // Drop the stale handle so downstream reads report absence
            // instead of a dead target.
            blackboard.remove(&self.target_key);
            return OperatorStatus::Failed;
        }

        if !world.is_receptacle(target) {
            return OperatorStatus::Failed;
        }

        let mut moved_any = false;
        for item in items {
            if !world.remove_item(owner, item) {
                continue;
            }
            if world.insert_item(target, item) {
                moved_any = true;
            }
        }

        if moved_any {
            // One completion cue for the whole dump, not one per item.
            if let Some(effect) = &self.dump_effect {
                world.play_effect(effect, owner);
            }
            OperatorStatus::Finished
        } else {
            OperatorStatus::Failed
        }
    }
}
