// src/exec/backend.rs

//! Pluggable command runner abstraction.

use std::future::Future;
use std::pin::Pin;

use crate::script::CommandLine;
use crate::types::CommandOutcome;

/// Trait abstracting how a single command line is executed.
///
/// Implementations must not return before the command has finished: the
/// runtime relies on strictly sequential execution. Every kind of failure,
/// including failing to start the process, is folded into the returned
/// [`CommandOutcome`].
pub trait CommandRunner: Send {
    fn run<'a>(
        &'a mut self,
        cmd: &'a CommandLine,
    ) -> Pin<Box<dyn Future<Output = CommandOutcome> + Send + 'a>>;
}
