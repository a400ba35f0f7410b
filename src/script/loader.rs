// src/script/loader.rs

use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::config::Variables;
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::script::Script;

/// Load and pre-process the command file at `path`.
///
/// A file that does not exist yields an empty script; any other read error
/// is returned. Invalid UTF-8 is decoded lossily rather than rejected.
pub fn load_script(fs: &dyn FileSystem, path: &Path, vars: &Variables) -> Result<Script> {
    let bytes = match fs.read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!(path = ?path, "command file not found; nothing to run");
            return Ok(Script::default());
        }
        Err(e) => return Err(e.into()),
    };

    let contents = String::from_utf8_lossy(&bytes);
    let script = Script::from_lines(contents.lines(), vars);
    debug!(
        path = ?path,
        lines = script.len(),
        commands = script.command_count(),
        "loaded command file"
    );
    Ok(script)
}
