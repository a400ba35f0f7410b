// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! `name=value` bindings are not clap arguments: they may appear anywhere on
//! the command line, so [`parse_from`] pulls them out of the raw token list
//! before handing the rest to clap.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser, ValueEnum};

/// Command-line arguments for `runlines`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "runlines",
    version,
    about = "Run the lines of a command file once or in a loop.",
    long_about = None,
    override_usage = "runlines <FILE> [OPTIONS] [NAME=VALUE]...",
    after_help = "Vars:\n  <NAME>=<VALUE>  Replaced in lines (<NAME> replaced by <VALUE>)"
)]
pub struct CliArgs {
    /// File with one command per line.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Ignore errors and continue execution.
    #[arg(short = 'i', long)]
    pub ignore_errors: bool,

    /// Run file lines only once.
    #[arg(short = 'o', long)]
    pub once: bool,

    /// Sync with other instances using the sync file.
    #[arg(short = 's', long)]
    pub sync: bool,

    /// Verbose output (`-vv` for very verbose).
    #[arg(short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Path of the sync file shared with other instances.
    #[arg(long, value_name = "PATH", default_value = "run.txt")]
    pub sync_file: PathBuf,

    /// Load and print the command lines, but don't execute anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `RUNLINES_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Raw `name=value` tokens, in the order they were given.
    #[arg(skip)]
    pub vars: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Parse the process arguments.
pub fn parse() -> Result<CliArgs, clap::Error> {
    parse_from(std::env::args_os())
}

/// Parse an explicit argument list (the first item is the binary name).
///
/// Tokens that are not valid UTF-8 are never bindings; they go to clap.
pub fn parse_from<I, T>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut args = args.into_iter().map(Into::<OsString>::into);
    let bin = args.next().unwrap_or_else(|| OsString::from("runlines"));

    let mut vars = Vec::new();
    let mut rest = vec![bin];
    for arg in args {
        if arg.to_str().is_some_and(is_binding) {
            vars.push(arg.to_string_lossy().into_owned());
        } else {
            rest.push(arg);
        }
    }

    let mut parsed = CliArgs::try_parse_from(rest)?;
    parsed.vars = vars;
    Ok(parsed)
}

/// A token is a variable binding if it contains `=` and is not a long
/// option such as `--sync-file=x`.
pub fn is_binding(arg: &str) -> bool {
    arg.contains('=') && !arg.starts_with("--")
}

/// Usage text printed on any invocation error.
pub fn usage() -> String {
    CliArgs::command().render_help().to_string()
}
