//! Shared utilities and pure functions for runglob
//!
//! Path helpers here are lexical: they never touch the file system.

pub mod paths;
pub mod tracing;

pub use paths::*;
