use crate::{Blackboard, OperatorStatus, TickContext, WorldMut};

/// The executable unit that performs a primitive task's work over ticks.
///
/// Operator values are authoring-time configuration shared by every agent
/// running the task, so per-agent transient progress belongs in the
/// blackboard, never in operator fields. Multi-tick work is expressed by
/// returning [`OperatorStatus::Continuing`] and resuming from blackboard
/// state next tick; `update` must return within the tick.
///
/// `update` is safe to call every tick until it returns a terminal status;
/// the runner never calls it again for that task instance afterwards. Side
/// effects must only happen on ticks that make forward progress: a tick that
/// determines "nothing to do" returns `Finished` without side effects.
pub trait Operator<W>: 'static
where
    W: WorldMut + 'static,
{
    fn update(
        &self,
        ctx: &TickContext,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> OperatorStatus;
}
