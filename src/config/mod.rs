// src/config/mod.rs

//! Run configuration.
//!
//! - [`model`] holds the resolved types (`RunOptions`, `Variables`, ...).
//! - [`resolve`] turns parsed [`CliArgs`](crate::cli::CliArgs) into a
//!   validated `RunOptions`.

pub mod model;
pub mod resolve;

pub use model::{RunOptions, Variables, Verbosity};
