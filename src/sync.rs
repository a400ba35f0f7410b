// src/sync.rs

//! Cross-instance coordination through a sentinel file.
//!
//! The file's existence is the whole protocol: present means "keep going",
//! absent means some instance hit a failure and everyone in sync mode
//! should stop. Its content is never read.
//!
//! Check-then-act is not atomic. Two instances racing on the same sentinel
//! can at worst run one extra command after a peer faulted.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::fs::FileSystem;

/// Default sentinel path, relative to the working directory.
pub const DEFAULT_SYNC_FILE: &str = "run.txt";

const SENTINEL_CONTENT: &[u8] = b"run\n";

#[derive(Debug, Clone)]
pub struct SyncSentinel {
    path: PathBuf,
    fs: Arc<dyn FileSystem>,
}

impl SyncSentinel {
    pub fn new(path: impl Into<PathBuf>, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            path: path.into(),
            fs,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the sentinel unless it already exists.
    pub fn ensure_present(&self) -> Result<()> {
        if !self.fs.exists(&self.path) {
            info!(path = ?self.path, "creating sync file");
            self.fs.write(&self.path, SENTINEL_CONTENT)?;
        }
        Ok(())
    }

    pub fn is_present(&self) -> bool {
        self.fs.exists(&self.path)
    }

    /// Delete the sentinel, telling every cooperating instance to stop.
    pub fn signal_fault(&self) -> Result<()> {
        if self.fs.exists(&self.path) {
            debug!(path = ?self.path, "removing sync file after command failure");
            self.fs.remove_file(&self.path)?;
        }
        Ok(())
    }
}
