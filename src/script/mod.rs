// src/script/mod.rs

//! The command file: loading, pre-processing and line classification.
//!
//! Every line is trimmed and then run through the variable bindings once,
//! at load time. The resulting [`Script`] is immutable.

pub mod line;
pub mod loader;

pub use line::{CommandLine, ScriptLine};
pub use loader::load_script;

use crate::config::Variables;

/// Pre-processed command file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    lines: Vec<ScriptLine>,
}

impl Script {
    /// Build a script from raw lines, trimming and substituting each one.
    pub fn from_lines<I, S>(raw: I, vars: &Variables) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines = raw
            .into_iter()
            .map(|line| ScriptLine::parse(&vars.apply(line.as_ref().trim())))
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[ScriptLine] {
        &self.lines
    }

    pub fn get(&self, index: usize) -> Option<&ScriptLine> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines that would actually spawn a process.
    pub fn command_count(&self) -> usize {
        self.lines.iter().filter(|l| l.command().is_some()).count()
    }
}
