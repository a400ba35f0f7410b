#![allow(dead_code)]

use std::path::PathBuf;

use runlines::config::{RunOptions, Verbosity};
use runlines::fs::mock::MockFileSystem;

/// Path of the command file used by the mock-filesystem helpers.
pub const SCRIPT_PATH: &str = "lines.txt";

/// Builder for `RunOptions` to simplify test setup.
pub struct RunOptionsBuilder {
    options: RunOptions,
}

impl RunOptionsBuilder {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            options: RunOptions::new(file),
        }
    }

    pub fn ignore_errors(mut self) -> Self {
        self.options.ignore_errors = true;
        self
    }

    pub fn once(mut self) -> Self {
        self.options.run_once = true;
        self
    }

    pub fn sync(mut self) -> Self {
        self.options.sync = true;
        self
    }

    pub fn sync_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.sync = true;
        self.options.sync_file = path.into();
        self
    }

    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.options.verbosity = verbosity;
        self
    }

    pub fn var(mut self, name: &str, value: &str) -> Self {
        self.options.variables.insert(name, value);
        self
    }

    pub fn build(self) -> RunOptions {
        self.options
    }
}

/// A mock filesystem holding `lines` (newline-joined) at [`SCRIPT_PATH`].
pub fn mock_fs_with_script(lines: &[&str]) -> MockFileSystem {
    let fs = MockFileSystem::new();
    fs.add_file(SCRIPT_PATH, lines.join("\n"));
    fs
}
