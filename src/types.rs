use std::fmt;

/// Result of dispatching a single command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The process exited with code 0.
    Success,
    /// The process exited with a non-zero code (`-1` if it was killed by a
    /// signal and no code is available).
    Exited(i32),
    /// The process could not be started at all.
    LaunchFailed(String),
}

impl CommandOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Success)
    }
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutcome::Success => write!(f, "Exit code = 0"),
            CommandOutcome::Exited(code) => write!(f, "Exit code = {code}"),
            CommandOutcome::LaunchFailed(msg) => f.write_str(msg),
        }
    }
}

/// Whether the loop wraps around at the end of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopMode {
    /// Visit `0..N` indefinitely.
    #[default]
    Cycle,
    /// Visit every line once, then stop.
    Once,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The command file had no lines at all.
    NoLines,
    /// Cycle mode over a file with only blank and comment lines.
    NoCommands,
    /// Run-once mode went past the last line.
    Completed,
    /// The sync sentinel disappeared (a peer instance faulted).
    SyncLost,
    /// A command failed and errors are not ignored.
    CommandFailed,
    /// Ctrl-C while a command was running.
    Interrupted,
}
