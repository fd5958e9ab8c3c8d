//! Builder methods for creating errors with context

use super::types::Error;
use std::path::PathBuf;

impl Error {
    /// Create a no-match error for a pattern or a group
    #[must_use]
    pub fn no_match(pattern: impl Into<String>) -> Self {
        Error::NoMatch {
            pattern: pattern.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a manifest shape error
    #[must_use]
    pub fn manifest(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::Manifest {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a file system error
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// The offending pattern, if this is a no-match error
    pub fn unmatched_pattern(&self) -> Option<&str> {
        match self {
            Error::NoMatch { pattern } => Some(pattern),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_message() {
        let err = Error::no_match("nothing");
        assert_eq!(err.to_string(), "no scripts found: nothing");
        assert_eq!(err.unmatched_pattern(), Some("nothing"));
    }

    #[test]
    fn test_configuration_message() {
        let err = Error::configuration("bad flag");
        assert_eq!(err.to_string(), "configuration error: bad flag");
        assert_eq!(err.unmatched_pattern(), None);
    }

    #[test]
    fn test_file_system_message() {
        let err = Error::file_system(
            "/tmp/package.json",
            "read",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        let message = err.to_string();
        assert!(message.contains("read"));
        assert!(message.contains("/tmp/package.json"));
        assert!(message.contains("gone"));
    }
}
