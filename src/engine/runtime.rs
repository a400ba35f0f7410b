// src/engine/runtime.rs

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use tracing::{debug, info, warn};

use crate::config::RunOptions;
use crate::errors::Result;
use crate::exec::CommandRunner;
use crate::report::Reporter;
use crate::script::{Script, ScriptLine};
use crate::sync::SyncSentinel;
use crate::types::{LoopMode, StopReason};

use super::core::{Continuation, Sequencer};
use super::{RunState, RunSummary};

type ShutdownSignal = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Drives a [`Script`] line by line, one process at a time.
///
/// `Sequencer` decides where to go next; this struct does the IO around
/// it. The sync sentinel is only consulted when sync mode is on.
pub struct Runtime<R: CommandRunner> {
    script: Script,
    sequencer: Sequencer,
    runner: R,
    sentinel: Option<SyncSentinel>,
    reporter: Reporter,
    shutdown: ShutdownSignal,
}

impl<R: CommandRunner> fmt::Debug for Runtime<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("sequencer", &self.sequencer)
            .field("lines", &self.script.len())
            .field("sentinel", &self.sentinel)
            .finish_non_exhaustive()
    }
}

impl<R: CommandRunner> Runtime<R> {
    /// `sentinel` must be `Some` exactly when sync mode is on.
    pub fn new(
        script: Script,
        options: &RunOptions,
        runner: R,
        sentinel: Option<SyncSentinel>,
        reporter: Reporter,
    ) -> Self {
        let sequencer = Sequencer::from_options(script.len(), options);
        Self {
            script,
            sequencer,
            runner,
            sentinel,
            reporter,
            shutdown: Box::pin(std::future::pending::<()>()),
        }
    }

    /// Stop with [`StopReason::Interrupted`] when `signal` resolves while a
    /// command is running.
    pub fn with_shutdown<F>(mut self, signal: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.shutdown = Box::pin(signal);
        self
    }

    pub async fn run(mut self) -> Result<RunSummary> {
        if self.script.is_empty() {
            self.reporter.no_lines()?;
            return Ok(RunSummary {
                state: RunState::new(),
                stop: StopReason::NoLines,
            });
        }

        // Cycling over skip-only lines would never dispatch anything.
        if self.sequencer.mode() == LoopMode::Cycle && self.script.command_count() == 0 {
            info!(lines = self.script.len(), "no command lines to cycle over; stopping");
            return Ok(RunSummary {
                state: RunState::new(),
                stop: StopReason::NoCommands,
            });
        }

        info!(
            lines = self.script.len(),
            mode = ?self.sequencer.mode(),
            sync = self.sentinel.is_some(),
            "runlines started"
        );

        let mut state = RunState::new();
        let stop = loop {
            if let Some(stop) = self.step(&mut state).await? {
                break stop;
            }
            match self.sequencer.next_index(state.index()) {
                Some(next) => state.set_index(next),
                None => break StopReason::Completed,
            }
        };

        self.reporter.flush()?;
        info!(ok = state.ok(), fail = state.fail(), ?stop, "runlines stopped");
        Ok(RunSummary { state, stop })
    }

    /// Process the line at `state.index()`. Returns `Some` when the run
    /// must end here.
    async fn step(&mut self, state: &mut RunState) -> Result<Option<StopReason>> {
        let index = state.index();
        let Some(cmd) = self.script.get(index).and_then(ScriptLine::command) else {
            return Ok(None);
        };

        if let Some(sentinel) = &self.sentinel {
            if !sentinel.is_present() {
                info!(path = ?sentinel.path(), "sync file is gone; stopping");
                self.reporter.sync_lost(sentinel.path())?;
                return Ok(Some(StopReason::SyncLost));
            }
        }

        self.reporter.executing(index, cmd)?;
        debug!(line = index + 1, command = %cmd, "dispatching command");

        let outcome = tokio::select! {
            biased;
            _ = &mut self.shutdown => {
                warn!(line = index + 1, "interrupted while command was running");
                return Ok(Some(StopReason::Interrupted));
            }
            outcome = self.runner.run(cmd) => outcome,
        };

        state.record(&outcome);
        if outcome.is_success() {
            self.reporter.tally(state)?;
            return Ok(None);
        }

        warn!(line = index + 1, command = %cmd, %outcome, "command failed");
        self.reporter.failure(&outcome)?;
        if let Some(sentinel) = &self.sentinel {
            sentinel.signal_fault()?;
        }
        self.reporter.tally(state)?;

        match self.sequencer.after(&outcome) {
            Continuation::Continue => Ok(None),
            Continuation::Stop => Ok(Some(StopReason::CommandFailed)),
        }
    }
}
