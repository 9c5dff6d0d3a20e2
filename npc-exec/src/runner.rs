use std::sync::Arc;

use npc_core::{Blackboard, Operator, OperatorStatus, Precondition, TaskOutcome, TickContext, WorldMut};

/// A primitive task bound to one agent: the gate and the work.
///
/// Precondition and operator values are shared authoring-time configuration,
/// so the pair is held behind `Arc` and reused across agents.
pub struct Task<W>
where
    W: WorldMut + 'static,
{
    pub precondition: Arc<dyn Precondition<W>>,
    pub operator: Arc<dyn Operator<W>>,
}

impl<W> Task<W>
where
    W: WorldMut + 'static,
{
    pub fn new(precondition: Arc<dyn Precondition<W>>, operator: Arc<dyn Operator<W>>) -> Self {
        Self {
            precondition,
            operator,
        }
    }
}

impl<W> Clone for Task<W>
where
    W: WorldMut + 'static,
{
    fn clone(&self) -> Self {
        Self {
            precondition: Arc::clone(&self.precondition),
            operator: Arc::clone(&self.operator),
        }
    }
}

/// Lifecycle of one assigned task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    NotStarted,
    Active,
    Finished,
    Failed,
}

impl TaskState {
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskState::Finished | TaskState::Failed)
    }
}

/// What a single runner tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskTick {
    /// No task assigned, or the task already reached a terminal state.
    Idle,
    /// Precondition unmet; the task aborted without invoking the operator.
    Aborted,
    /// The operator ran and returned the contained status.
    Ran(OperatorStatus),
}

/// Advances at most one task per agent, once per tick.
///
/// The precondition is re-checked strictly before the operator on every
/// tick: a precondition that stops holding mid-execution aborts the task
/// rather than letting it run with a possibly invalid target. Terminal
/// states are sticky; retry is the external planner's responsibility.
pub struct TaskRunner<W>
where
    W: WorldMut + 'static,
{
    task: Option<Task<W>>,
    state: TaskState,
}

impl<W> TaskRunner<W>
where
    W: WorldMut + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current task (if any) with a fresh one.
    pub fn assign(&mut self, task: Task<W>) {
        self.task = Some(task);
        self.state = TaskState::NotStarted;
    }

    /// Cancel between ticks: the task is simply dropped. Operators tolerate
    /// abandonment mid-`Continuing`; their transient blackboard state is
    /// overwritten or ignored by the next task.
    pub fn clear(&mut self) {
        self.task = None;
        self.state = TaskState::NotStarted;
    }

    pub fn has_task(&self) -> bool {
        self.task.is_some()
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    /// Consume the terminal result, handing the agent back to the planner.
    pub fn take_outcome(&mut self) -> Option<TaskOutcome> {
        let outcome = match self.state {
            TaskState::Finished => TaskOutcome::Finished,
            TaskState::Failed => TaskOutcome::Failed,
            _ => return None,
        };
        self.task = None;
        self.state = TaskState::NotStarted;
        Some(outcome)
    }

    pub fn tick(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> TaskTick {
        if self.state.is_terminal() {
            return TaskTick::Idle;
        }

        let Some(task) = self.task.as_ref() else {
            return TaskTick::Idle;
        };

        if !task.precondition.is_met(&*world, blackboard) {
            self.state = TaskState::Failed;
            return TaskTick::Aborted;
        }

        let status = task.operator.update(ctx, world, blackboard);
        self.state = match status {
            OperatorStatus::Continuing => TaskState::Active,
            OperatorStatus::Finished => TaskState::Finished,
            OperatorStatus::Failed => TaskState::Failed,
        };
        TaskTick::Ran(status)
    }
}

impl<W> Default for TaskRunner<W>
where
    W: WorldMut + 'static,
{
    fn default() -> Self {
        Self {
            task: None,
            state: TaskState::NotStarted,
        }
    }
}
