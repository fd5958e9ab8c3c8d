//! Core errors and constants for the `runglob` plan compiler.
//!
//! - **`errors`**: the `Error` enum and `Result` alias shared by every crate
//!   in the workspace. Construction of a plan is all-or-nothing, so the only
//!   error a caller normally sees from compilation is [`Error::NoMatch`].
//! - **`constants`**: naming conventions and environment variable names.

pub mod constants;
pub mod errors;

pub use self::{
    constants::*,
    errors::{Error, Result},
};
