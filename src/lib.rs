// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod report;
pub mod script;
pub mod sync;
pub mod types;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cli::CliArgs;
use crate::config::RunOptions;
use crate::engine::Runtime;
use crate::errors::Result;
use crate::exec::{CommandRunner, ProcessRunner};
use crate::fs::{FileSystem, RealFileSystem};
use crate::report::Reporter;
use crate::script::load_script;
use crate::sync::SyncSentinel;

/// High-level entry point used by `main.rs`.
///
/// Resolves options, then either prints the pre-processed command file
/// (`--dry-run`) or runs it against real processes until it stops.
pub async fn run(args: CliArgs) -> Result<()> {
    let options = RunOptions::try_from(&args)?;
    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);

    if args.dry_run {
        let script = load_script(fs.as_ref(), &options.file, &options.variables)?;
        let mut reporter = Reporter::stdout(options.verbosity);
        reporter.dry_run(&script)?;
        reporter.flush()?;
        debug!("dry-run complete (no execution)");
        return Ok(());
    }

    let reporter = Reporter::stdout(options.verbosity);
    let runtime = build_runtime(&options, fs, ProcessRunner::new(), reporter)?;

    let summary = runtime.with_shutdown(ctrl_c()).run().await?;
    debug!(?summary, "run finished");
    Ok(())
}

/// Perform the startup steps and return a runtime ready to go.
///
/// In sync mode the sentinel is created (if missing) before the command
/// file is read, so instances started later see it.
pub fn build_runtime<R: CommandRunner>(
    options: &RunOptions,
    fs: Arc<dyn FileSystem>,
    runner: R,
    reporter: Reporter,
) -> Result<Runtime<R>> {
    let sentinel = if options.sync {
        let sentinel = SyncSentinel::new(&options.sync_file, Arc::clone(&fs));
        sentinel.ensure_present()?;
        Some(sentinel)
    } else {
        None
    };

    let script = load_script(fs.as_ref(), &options.file, &options.variables)?;
    Ok(Runtime::new(script, options, runner, sentinel, reporter))
}

/// Resolves on Ctrl-C. If the handler can't be installed it never resolves.
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
