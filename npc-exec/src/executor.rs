use npc_core::{Blackboard, EntityId, TaskOutcome, TickContext, WorldMut, OWNER};
use npc_tools::{TraceEvent, TraceSink};

use crate::{Task, TaskRunner, TaskState, TaskTick};

/// Per-agent execution harness: one blackboard, at most one active task.
///
/// The blackboard is created with the `Owner` key pre-seeded and lives for
/// the agent's entire behavior-controlled lifetime. Keys never leak across
/// agents.
pub struct AgentExecutor<W>
where
    W: WorldMut + 'static,
{
    pub agent: EntityId,
    pub blackboard: Blackboard,
    pub runner: TaskRunner<W>,
    trace: Option<Box<dyn TraceSink>>,
}

impl<W> AgentExecutor<W>
where
    W: WorldMut + 'static,
{
    pub fn new(agent: EntityId) -> Self {
        let mut blackboard = Blackboard::new();
        blackboard.set(OWNER, agent);
        Self {
            agent,
            blackboard,
            runner: TaskRunner::default(),
            trace: None,
        }
    }

    pub fn with_trace(mut self, sink: Box<dyn TraceSink>) -> Self {
        self.trace = Some(sink);
        self
    }

    pub fn assign(&mut self, task: Task<W>) {
        self.runner.assign(task);
    }

    pub fn clear(&mut self) {
        self.runner.clear();
    }

    pub fn take_outcome(&mut self) -> Option<TaskOutcome> {
        self.runner.take_outcome()
    }

    pub fn tick(&mut self, ctx: &TickContext, world: &mut W) {
        if self.runner.has_task() && self.runner.state() == TaskState::NotStarted {
            self.emit(TraceEvent::new(ctx.tick, "task.start").with_a(self.agent.stable_id()));
        }

        match self.runner.tick(ctx, world, &mut self.blackboard) {
            TaskTick::Idle => {}
            TaskTick::Aborted => {
                self.emit(TraceEvent::new(ctx.tick, "task.unmet").with_a(self.agent.stable_id()));
            }
            TaskTick::Ran(status) => match self.runner.state() {
                TaskState::Finished => {
                    self.emit(
                        TraceEvent::new(ctx.tick, "task.finished").with_a(self.agent.stable_id()),
                    );
                }
                TaskState::Failed => {
                    self.emit(
                        TraceEvent::new(ctx.tick, "task.failed").with_a(self.agent.stable_id()),
                    );
                }
                _ => debug_assert_eq!(status.outcome(), None),
            },
        }
    }

    fn emit(&mut self, event: TraceEvent) {
        if let Some(sink) = self.trace.as_mut() {
            sink.emit(event);
        }
    }
}

/// Advance every executor exactly once, in stable agent order.
///
/// Cross-agent tick order is deterministic here, but correctness must not
/// depend on it: each agent's blackboard and task are independent.
pub fn tick_executors<W>(ctx: &TickContext, world: &mut W, executors: &mut [AgentExecutor<W>])
where
    W: WorldMut + 'static,
{
    executors.sort_by_key(|e| e.agent);
    for executor in executors.iter_mut() {
        executor.tick(ctx, world);
    }
}
