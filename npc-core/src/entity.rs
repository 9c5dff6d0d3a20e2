#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque, stable handle to a world entity.
///
/// The core never dereferences a handle itself; resolution (components,
/// containers, liveness) happens behind world capability traits. Stable
/// ordering keeps cross-agent tick order deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntityId(pub u64);

impl EntityId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn stable_id(self) -> u64 {
        self.0
    }
}
