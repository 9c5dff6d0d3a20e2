//! Tooling primitives for deterministic NPC AI.
//!
//! This crate is intentionally lightweight and engine-agnostic. Higher-level
//! integrations (debug drawing, inspectors, etc.) should live in dedicated
//! adapter crates.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{NullTraceSink, TraceEvent, TraceLog, TraceSink, VecTraceSink};
