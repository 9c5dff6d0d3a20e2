use npc_core::{Blackboard, Precondition};

use crate::StorageWorldView;

/// Checks whether the owner's storage has available capacity, is full, or
/// has items.
///
/// `check_has_items` takes priority when both flags are set: it is satisfied
/// iff the container holds at least one item. Otherwise the gate reads "has
/// space", inverted when `check_full` asks "is storage full".
#[derive(Debug, Clone, Copy, Default)]
pub struct StorageCapacityPrecondition {
    pub check_full: bool,
    pub check_has_items: bool,
}

impl StorageCapacityPrecondition {
    pub fn new(check_full: bool, check_has_items: bool) -> Self {
        Self {
            check_full,
            check_has_items,
        }
    }
}

impl<W> Precondition<W> for StorageCapacityPrecondition
where
    W: StorageWorldView + 'static,
{
    fn is_met(&self, world: &W, blackboard: &Blackboard) -> bool {
        let Some(owner) = blackboard.owner() else {
            return false;
        };

        let Some(items) = world.contained_items(owner) else {
            return false;
        };

        if self.check_has_items {
            return !items.is_empty();
        }

        let has_space = world.has_space(owner);
        if self.check_full {
            !has_space
        } else {
            has_space
        }
    }
}
