// src/config/resolve.rs

use crate::cli::CliArgs;
use crate::config::model::{RunOptions, Variables, Verbosity};
use crate::errors::RunlinesError;

impl TryFrom<&CliArgs> for RunOptions {
    type Error = RunlinesError;

    fn try_from(args: &CliArgs) -> Result<Self, Self::Error> {
        let file = match &args.file {
            Some(path) if !path.as_os_str().is_empty() => path.clone(),
            _ => return Err(RunlinesError::Usage("missing command file".to_string())),
        };

        Ok(RunOptions {
            file,
            ignore_errors: args.ignore_errors,
            run_once: args.once,
            sync: args.sync,
            sync_file: args.sync_file.clone(),
            verbosity: Verbosity::from_count(args.verbose),
            variables: parse_bindings(&args.vars)?,
        })
    }
}

/// Build [`Variables`] from raw `name=value` tokens, split on the first `=`.
///
/// An empty name would match between every character, so it is rejected.
pub fn parse_bindings<S: AsRef<str>>(tokens: &[S]) -> Result<Variables, RunlinesError> {
    let mut vars = Variables::new();
    for token in tokens {
        let token = token.as_ref();
        let Some((name, value)) = token.split_once('=') else {
            return Err(RunlinesError::Usage(format!(
                "invalid variable binding '{token}' (expected NAME=VALUE)"
            )));
        };
        if name.is_empty() {
            return Err(RunlinesError::Usage(format!(
                "invalid variable binding '{token}' (empty name)"
            )));
        }
        vars.insert(name, value);
    }
    Ok(vars)
}
