use crate::{Blackboard, WorldView};

/// A pure gate on whether a primitive task may start or continue.
///
/// Precondition values are authoring-time configuration shared across every
/// agent running the task; evaluation goes through shared references only, so
/// an implementation cannot mutate the blackboard or the world.
///
/// Implementations must resolve the `Owner` key before anything else and
/// fail closed: an absent owner, a missing component/resource, or a
/// mismatched blackboard key all read as "not met", never as an error that
/// aborts the agent's tick.
pub trait Precondition<W>: 'static
where
    W: WorldView + 'static,
{
    fn is_met(&self, world: &W, blackboard: &Blackboard) -> bool;
}
