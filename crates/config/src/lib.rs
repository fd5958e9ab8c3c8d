//! Configuration and manifest loading for runglob
//!
//! Plan options are assembled from several sources with most specific
//! source wins precedence: built-in defaults, the manifest's `runglob`
//! section, `RUNGLOB_*` environment variables, and finally command-line
//! flags.

pub mod env;
pub mod manifest;
pub mod options;

pub use env::*;
pub use manifest::*;
pub use options::*;
