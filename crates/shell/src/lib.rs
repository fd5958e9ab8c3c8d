//! Shell integration for runglob
//!
//! This crate splits command strings into shell tokens, serializes token
//! streams back into shell-safe text, resolves executables against an
//! explicit search path, and rewrites invocations of locally installed
//! executable shims so they run through an interpreter with a preloaded
//! module.

pub mod preload;
pub mod quote;
pub mod search;
pub mod tokens;

pub use preload::*;
pub use quote::*;
pub use search::*;
pub use tokens::*;
