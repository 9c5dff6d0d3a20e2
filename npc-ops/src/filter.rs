use std::collections::BTreeSet;

use npc_core::{Blackboard, EntityId, Precondition};

use crate::{ConfigError, EntityWorldView};

/// Gates on a candidate entity carrying at least one required tag.
///
/// The candidate is read from a configured blackboard key, typically written
/// by an upstream targeting step. An empty tag set would silently match
/// nothing, so it is rejected at construction.
#[derive(Debug, Clone)]
pub struct TagFilterPrecondition {
    target_key: String,
    tags: BTreeSet<String>,
}

impl TagFilterPrecondition {
    pub fn new(
        target_key: impl Into<String>,
        tags: impl IntoIterator<Item = String>,
    ) -> Result<Self, ConfigError> {
        let target_key = target_key.into();
        if target_key.is_empty() {
            return Err(ConfigError::MissingParameter("target_key"));
        }

        let tags: BTreeSet<String> = tags.into_iter().collect();
        if tags.is_empty() {
            return Err(ConfigError::EmptyTags);
        }

        Ok(Self { target_key, tags })
    }

    pub fn target_key(&self) -> &str {
        &self.target_key
    }
}

impl<W> Precondition<W> for TagFilterPrecondition
where
    W: EntityWorldView + 'static,
{
    fn is_met(&self, world: &W, blackboard: &Blackboard) -> bool {
        if blackboard.owner().is_none() {
            return false;
        }

        let Some(target) = blackboard.get::<EntityId>(&self.target_key) else {
            return false;
        };

        if !world.is_alive(target) {
            return false;
        }

        self.tags.iter().any(|tag| world.has_tag(target, tag))
    }
}
