// src/exec/process.rs

use std::future::Future;
use std::pin::Pin;
use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::exec::CommandRunner;
use crate::script::CommandLine;
use crate::types::CommandOutcome;

/// Runs each command as a child process and waits for it.
///
/// The child gets no console window (Windows), a closed stdin, and the
/// parent's stdout/stderr. It is killed if the wait is abandoned, e.g. on
/// Ctrl-C.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    fn run<'a>(
        &'a mut self,
        cmd: &'a CommandLine,
    ) -> Pin<Box<dyn Future<Output = CommandOutcome> + Send + 'a>> {
        Box::pin(run_command(cmd))
    }
}

async fn run_command(cmd: &CommandLine) -> CommandOutcome {
    match run_command_inner(cmd).await {
        Ok(status) => {
            let code = status.code().unwrap_or(-1);
            info!(
                program = %cmd.program(),
                exit_code = code,
                success = status.success(),
                "command process exited"
            );
            if status.success() {
                CommandOutcome::Success
            } else {
                CommandOutcome::Exited(code)
            }
        }
        Err(err) => {
            warn!(program = %cmd.program(), error = %err, "command could not be run");
            CommandOutcome::LaunchFailed(format!("{err:#}"))
        }
    }
}

async fn run_command_inner(cmd: &CommandLine) -> Result<ExitStatus> {
    debug!(program = %cmd.program(), args = ?cmd.args(), "starting command process");

    let mut command = build_command(cmd)?;
    let mut child = command
        .spawn()
        .with_context(|| format!("failed to launch '{}'", cmd.program()))?;

    child
        .wait()
        .await
        .with_context(|| format!("waiting for process of '{}'", cmd.program()))
}

fn build_command(cmd: &CommandLine) -> Result<Command> {
    let mut command = Command::new(cmd.program());
    if let Some(tail) = cmd.args() {
        append_args(&mut command, tail)?;
    }

    command
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true);

    #[cfg(windows)]
    {
        const CREATE_NO_WINDOW: u32 = 0x0800_0000;
        command.creation_flags(CREATE_NO_WINDOW);
    }

    Ok(command)
}

/// Windows programs parse their own command line, so the tail goes through
/// untouched.
#[cfg(windows)]
fn append_args(command: &mut Command, tail: &str) -> Result<()> {
    command.raw_arg(tail);
    Ok(())
}

#[cfg(not(windows))]
fn append_args(command: &mut Command, tail: &str) -> Result<()> {
    command.args(split_args(tail)?);
    Ok(())
}

/// Split an argument tail into argv words using POSIX quoting rules.
///
/// Only quoting and backslash escapes are honoured; there is no expansion,
/// piping or redirection.
pub fn split_args(tail: &str) -> Result<Vec<String>> {
    shell_words::split(tail).with_context(|| format!("invalid argument string: {tail}"))
}
