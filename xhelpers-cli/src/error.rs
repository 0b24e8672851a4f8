//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use std::fmt;
use xhelpers::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),

    /// Output could not be serialized.
    Serialization(String),

    /// Semantic failure (e.g., unparsable timestamp) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (e.g., unparsable timestamp)
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Library(lib_err) => match lib_err {
                LibError::Io(_) | LibError::PermissionDenied { .. } => 5,
                LibError::Configuration(_) | LibError::Validation { .. } => 7,
                _ => 6,
            },
            CliError::Serialization(_) => 6,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::Serialization(msg) => write!(f, "Cannot format output: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(e: serde_yaml::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::SemanticFailure("x".into()).exit_code(), 1);
        assert_eq!(CliError::InvalidArguments("x".into()).exit_code(), 4);
        assert_eq!(CliError::Io(std::io::Error::other("x")).exit_code(), 5);
        assert_eq!(CliError::Config("x".into()).exit_code(), 7);
        assert_eq!(CliError::Serialization("x".into()).exit_code(), 6);
    }

    #[test]
    fn test_library_exit_codes() {
        let not_found = LibError::PathNotFound {
            path: PathBuf::from("/gone"),
        };
        assert_eq!(CliError::from(not_found).exit_code(), 6);

        let validation = LibError::Validation {
            field: "timestamp_precision".into(),
            message: "too large".into(),
        };
        assert_eq!(CliError::from(validation).exit_code(), 7);

        let denied = LibError::PermissionDenied {
            path: PathBuf::from("/root"),
        };
        assert_eq!(CliError::from(denied).exit_code(), 5);
    }

    #[test]
    fn test_display_prefixes() {
        let err = CliError::InvalidArguments("empty mask".into());
        assert_eq!(err.to_string(), "Invalid arguments: empty mask");
        let err = CliError::SemanticFailure("cannot parse".into());
        assert_eq!(err.to_string(), "cannot parse");
    }
}
