//! Core error type definitions

use miette::Diagnostic;
use std::path::PathBuf;

/// Result type alias for runglob operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for runglob operations
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum Error {
    /// A pattern (or a whole group) matched no script and raw fallback is off
    #[error("no scripts found: {pattern}")]
    #[diagnostic(
        code(runglob::no_match),
        help("check the script names in the manifest, or pass --raw to run the pattern as a shell command")
    )]
    NoMatch { pattern: String },

    /// Configuration errors
    #[error("configuration error: {message}")]
    #[diagnostic(code(runglob::configuration))]
    Configuration { message: String },

    /// The manifest was readable JSON but had the wrong shape
    #[error("invalid manifest '{}': {message}", path.display())]
    #[diagnostic(code(runglob::manifest))]
    Manifest { path: PathBuf, message: String },

    /// File system operations
    #[error("file system {operation} operation failed for '{}': {source}", path.display())]
    #[diagnostic(code(runglob::io))]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    #[diagnostic(code(runglob::json))]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}
