/// Read-only world access.
///
/// The core crate intentionally does not prescribe which queries a world must
/// expose; specific subsystems (storage, lookup, effects) should define
/// extension traits.
pub trait WorldView {}

/// Write access / effect sink.
pub trait WorldMut: WorldView {}
