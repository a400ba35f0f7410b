// src/engine/state.rs

use crate::types::CommandOutcome;

/// Mutable counters of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunState {
    index: usize,
    ok: u64,
    fail: u64,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-based index of the current line.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub fn ok(&self) -> u64 {
        self.ok
    }

    pub fn fail(&self) -> u64 {
        self.fail
    }

    /// Number of dispatches so far.
    pub fn dispatched(&self) -> u64 {
        self.ok + self.fail
    }

    pub fn record(&mut self, outcome: &CommandOutcome) {
        if outcome.is_success() {
            self.ok += 1;
        } else {
            self.fail += 1;
        }
    }
}
