//! Reference preconditions and operators built on the `npc-core` contracts.
//!
//! These are worked examples of the execution contract, not core behavior:
//! capacity gating, tag filtering, trash disposal, and magnetic pickup. Each
//! consumes the world through the capability traits in [`world`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod dispose;
pub mod effect;
pub mod error;
pub mod filter;
pub mod magnet;
pub mod storage;
pub mod world;

pub use dispose::DisposeOperator;
pub use effect::EffectRef;
pub use error::ConfigError;
pub use filter::TagFilterPrecondition;
pub use magnet::MagnetPickupOperator;
pub use storage::StorageCapacityPrecondition;
pub use world::{
    EffectsWorldMut, EntityWorldView, LookupWorldView, StorageWorldMut, StorageWorldView,
};
