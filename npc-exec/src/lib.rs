//! Per-agent task runner: drives one `(precondition, operator)` pair per
//! agent through a bounded per-tick state machine.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod executor;
pub mod runner;

pub use executor::{tick_executors, AgentExecutor};
pub use runner::{Task, TaskRunner, TaskState, TaskTick};
