// src/main.rs

use clap::error::ErrorKind;
use runlines::errors::RunlinesError;
use runlines::{cli, logging, run};

#[tokio::main]
async fn main() {
    let args = match cli::parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return;
        }
        Err(_) => {
            print!("{}", cli::usage());
            return;
        }
    };

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("runlines error: {err:?}");
        std::process::exit(1);
    }

    match run(args).await {
        Ok(()) => {}
        Err(RunlinesError::Usage(_)) => print!("{}", cli::usage()),
        Err(err) => {
            eprintln!("runlines error: {err:?}");
            std::process::exit(1);
        }
    }
}
