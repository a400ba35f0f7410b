// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`backend`] provides the `CommandRunner` trait the runtime dispatches
//!   through, so tests can swap in a fake that spawns nothing.
//! - [`process`] is the production runner built on `tokio::process`.

pub mod backend;
pub mod process;

pub use backend::CommandRunner;
pub use process::{ProcessRunner, split_args};
