// src/engine/mod.rs

//! Sequencing engine.
//!
//! The pure decisions (where to go next, whether a failure ends the run)
//! live in [`core`] and can be tested without processes or files. The
//! async shell in [`runtime`] does the IO: sentinel checks, dispatching
//! through a [`CommandRunner`](crate::exec::CommandRunner), and progress
//! output.

pub mod core;
pub mod runtime;
pub mod state;

pub use self::core::{Continuation, Sequencer};
pub use runtime::Runtime;
pub use state::RunState;

pub use crate::types::{CommandOutcome, LoopMode, StopReason};

/// Final counters and the reason the run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub state: RunState,
    pub stop: StopReason,
}
