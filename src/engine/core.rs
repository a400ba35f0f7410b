// src/engine/core.rs

//! Pure sequencing decisions. No IO, no async.

use crate::config::RunOptions;
use crate::types::{CommandOutcome, LoopMode};

/// What the loop does after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    Continue,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequencer {
    len: usize,
    mode: LoopMode,
    ignore_errors: bool,
}

impl Sequencer {
    pub fn new(len: usize, mode: LoopMode, ignore_errors: bool) -> Self {
        Self {
            len,
            mode,
            ignore_errors,
        }
    }

    pub fn from_options(len: usize, options: &RunOptions) -> Self {
        Self::new(len, options.loop_mode(), options.ignore_errors)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn mode(&self) -> LoopMode {
        self.mode
    }

    /// Index to visit after `index`, or `None` once run-once mode has
    /// passed the last line. Cycle mode never returns `None` for a
    /// non-empty file.
    pub fn next_index(&self, index: usize) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        match self.mode {
            LoopMode::Once => {
                let next = index + 1;
                (next < self.len).then_some(next)
            }
            LoopMode::Cycle => Some((index + 1) % self.len),
        }
    }

    pub fn after(&self, outcome: &CommandOutcome) -> Continuation {
        if outcome.is_success() || self.ignore_errors {
            Continuation::Continue
        } else {
            Continuation::Stop
        }
    }
}
