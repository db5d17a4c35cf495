//! CLI-specific error types
//!
//! All CLI errors are terminal: they are printed to stderr and the process
//! exits non-zero.

use std::fmt;
use std::io;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout/file)
    IoError,
    /// Named schema does not exist
    UnknownSchema,
    /// A constraint table is malformed (programming defect)
    BadSpec,
    /// The checked document failed validation
    DocumentRejected,
    /// Server failed to start or crashed
    ServerError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "PERSONA_CLI_CONFIG_ERROR",
            Self::IoError => "PERSONA_CLI_IO_ERROR",
            Self::UnknownSchema => "PERSONA_CLI_UNKNOWN_SCHEMA",
            Self::BadSpec => "PERSONA_CLI_BAD_SPEC",
            Self::DocumentRejected => "PERSONA_CLI_DOCUMENT_REJECTED",
            Self::ServerError => "PERSONA_CLI_SERVER_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::new(CliErrorCode::IoError, err.to_string())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CliErrorCode::ConfigError.code(), "PERSONA_CLI_CONFIG_ERROR");
        assert_eq!(
            CliErrorCode::DocumentRejected.code(),
            "PERSONA_CLI_DOCUMENT_REJECTED"
        );
    }

    #[test]
    fn test_display_includes_code() {
        let err = CliError::new(CliErrorCode::UnknownSchema, "no such schema 'foo'");
        let display = format!("{}", err);
        assert!(display.contains("PERSONA_CLI_UNKNOWN_SCHEMA"));
        assert!(display.contains("foo"));
    }

    #[test]
    fn test_io_error_conversion() {
        let err: CliError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.code(), CliErrorCode::IoError);
    }
}
