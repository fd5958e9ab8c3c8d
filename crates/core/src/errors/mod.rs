//! Error types for runglob operations

mod builders;
mod conversions;
mod types;

pub use types::{Error, Result};
