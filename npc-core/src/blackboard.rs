use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Coord, EntityId};

/// Reserved key naming the entity the task network is controlling.
///
/// Every other key is a free-form string agreed upon between the planner and
/// the preconditions/operators that share it.
pub const OWNER: &str = "Owner";

/// Tagged value held in a blackboard slot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BbValue {
    Entity(EntityId),
    Number(f64),
    Bool(bool),
    Coord(Coord),
    Entities(Vec<EntityId>),
}

/// Typed read out of a [`BbValue`] slot.
///
/// Returns `None` when the stored kind differs from the requested type;
/// values never coerce across kinds.
pub trait FromBbValue: Sized {
    fn from_bb_value(value: &BbValue) -> Option<Self>;
}

impl FromBbValue for EntityId {
    fn from_bb_value(value: &BbValue) -> Option<Self> {
        match value {
            BbValue::Entity(entity) => Some(*entity),
            _ => None,
        }
    }
}

impl FromBbValue for f64 {
    fn from_bb_value(value: &BbValue) -> Option<Self> {
        match value {
            BbValue::Number(number) => Some(*number),
            _ => None,
        }
    }
}

impl FromBbValue for bool {
    fn from_bb_value(value: &BbValue) -> Option<Self> {
        match value {
            BbValue::Bool(flag) => Some(*flag),
            _ => None,
        }
    }
}

impl FromBbValue for Coord {
    fn from_bb_value(value: &BbValue) -> Option<Self> {
        match value {
            BbValue::Coord(coord) => Some(*coord),
            _ => None,
        }
    }
}

impl FromBbValue for Vec<EntityId> {
    fn from_bb_value(value: &BbValue) -> Option<Self> {
        match value {
            BbValue::Entities(entities) => Some(entities.clone()),
            _ => None,
        }
    }
}

impl From<EntityId> for BbValue {
    fn from(entity: EntityId) -> Self {
        BbValue::Entity(entity)
    }
}

impl From<f64> for BbValue {
    fn from(number: f64) -> Self {
        BbValue::Number(number)
    }
}

impl From<bool> for BbValue {
    fn from(flag: bool) -> Self {
        BbValue::Bool(flag)
    }
}

impl From<Coord> for BbValue {
    fn from(coord: Coord) -> Self {
        BbValue::Coord(coord)
    }
}

impl From<Vec<EntityId>> for BbValue {
    fn from(entities: Vec<EntityId>) -> Self {
        BbValue::Entities(entities)
    }
}

/// Per-agent keyed state shared between planning and execution steps.
///
/// Writes are last-writer-wins, with no versioning. Lookups signal absence
/// and kind mismatch the same way (`None`); callers treat both as "cannot
/// proceed", never as a fatal condition.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Blackboard {
    values: BTreeMap<String, BbValue>,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<BbValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get<T: FromBbValue>(&self, key: &str) -> Option<T> {
        T::from_bb_value(self.values.get(key)?)
    }

    pub fn get_raw(&self, key: &str) -> Option<&BbValue> {
        self.values.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<BbValue> {
        self.values.remove(key)
    }

    /// The entity this blackboard's task network is controlling.
    pub fn owner(&self) -> Option<EntityId> {
        self.get(OWNER)
    }
}
