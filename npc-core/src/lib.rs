//! Deterministic, engine-agnostic NPC task execution primitives.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod blackboard;
pub mod entity;
pub mod math;
pub mod operator;
pub mod precondition;
pub mod status;
pub mod tick;
pub mod world;

pub use blackboard::{BbValue, Blackboard, FromBbValue, OWNER};
pub use entity::EntityId;
pub use math::Coord;
pub use operator::Operator;
pub use precondition::Precondition;
pub use status::{OperatorStatus, TaskOutcome};
pub use tick::TickContext;
pub use world::{WorldMut, WorldView};
