// src/config/model.rs

use std::path::PathBuf;

use crate::types::LoopMode;

/// How much is printed before each dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Only tallies and failures.
    #[default]
    Quiet,
    /// `Executing <n>`.
    Verbose,
    /// `Executing (<n>): <command>`.
    VeryVerbose,
}

impl Verbosity {
    /// Map a `-v` count to a level; anything above 2 clamps.
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Verbosity::Quiet,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        }
    }
}

/// Ordered `name -> value` bindings applied to every command line.
///
/// Bindings keep the position at which a name was first seen. Binding the
/// same name again replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    bindings: Vec<(String, String)>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.bindings.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.bindings.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Replace every occurrence of every name in `line`.
    ///
    /// Bindings are applied one after another in order, so a later binding
    /// also matches text produced by an earlier one.
    pub fn apply(&self, line: &str) -> String {
        let mut out = line.to_string();
        for (name, value) in &self.bindings {
            if out.contains(name.as_str()) {
                out = out.replace(name.as_str(), value);
            }
        }
        out
    }
}

/// Fully resolved options for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub file: PathBuf,
    pub ignore_errors: bool,
    pub run_once: bool,
    pub sync: bool,
    pub sync_file: PathBuf,
    pub verbosity: Verbosity,
    pub variables: Variables,
}

impl RunOptions {
    /// Options with every flag off and the default sync file.
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            ignore_errors: false,
            run_once: false,
            sync: false,
            sync_file: PathBuf::from(crate::sync::DEFAULT_SYNC_FILE),
            verbosity: Verbosity::Quiet,
            variables: Variables::new(),
        }
    }

    pub fn loop_mode(&self) -> LoopMode {
        if self.run_once {
            LoopMode::Once
        } else {
            LoopMode::Cycle
        }
    }
}
