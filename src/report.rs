// src/report.rs

//! Human-readable progress lines.
//!
//! This is the program's user-facing output and goes to stdout; `tracing`
//! diagnostics go to stderr.

use std::io::{self, Write};
use std::path::Path;

use crate::config::Verbosity;
use crate::engine::RunState;
use crate::script::{CommandLine, Script, ScriptLine};
use crate::types::CommandOutcome;

pub struct Reporter {
    out: Box<dyn Write + Send>,
    verbosity: Verbosity,
}

impl Reporter {
    pub fn new(out: Box<dyn Write + Send>, verbosity: Verbosity) -> Self {
        Self { out, verbosity }
    }

    pub fn stdout(verbosity: Verbosity) -> Self {
        Self::new(Box::new(io::stdout()), verbosity)
    }

    /// Printed before each dispatch. `index` is zero-based.
    pub fn executing(&mut self, index: usize, cmd: &CommandLine) -> io::Result<()> {
        match self.verbosity {
            Verbosity::Quiet => Ok(()),
            Verbosity::Verbose => writeln!(self.out, "Executing {}", index + 1),
            Verbosity::VeryVerbose => writeln!(self.out, "Executing ({}): {}", index + 1, cmd),
        }
    }

    pub fn failure(&mut self, outcome: &CommandOutcome) -> io::Result<()> {
        writeln!(self.out, "{outcome}")
    }

    pub fn tally(&mut self, state: &RunState) -> io::Result<()> {
        writeln!(self.out, "OK={} FAIL={}", state.ok(), state.fail())
    }

    pub fn sync_lost(&mut self, sync_file: &Path) -> io::Result<()> {
        if self.verbosity >= Verbosity::Verbose {
            writeln!(self.out, "Sync file ({}) does not exist", sync_file.display())?;
        }
        Ok(())
    }

    pub fn no_lines(&mut self) -> io::Result<()> {
        writeln!(self.out, "No lines to execute")
    }

    pub fn dry_run(&mut self, script: &Script) -> io::Result<()> {
        writeln!(self.out, "runlines dry-run ({} lines)", script.len())?;
        for (i, line) in script.lines().iter().enumerate() {
            match line {
                ScriptLine::Blank => writeln!(self.out, "{:>4}  skip", i + 1)?,
                ScriptLine::Comment(text) => writeln!(self.out, "{:>4}  skip  {text}", i + 1)?,
                ScriptLine::Command(cmd) => writeln!(self.out, "{:>4}  run   {cmd}", i + 1)?,
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
