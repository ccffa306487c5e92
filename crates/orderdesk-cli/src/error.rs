//! CLI-specific error types and mappings.
//!
//! Maps `CoreError` to exit codes and user-facing messages.

use orderdesk_core::{AuthError, CoreError, PathError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Argument error (unknown language, malformed input).
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Sign-in was rejected.
    #[error("{0}")]
    Auth(String),

    /// The route guard did not let the command's screen render.
    #[error("Not signed in: {0}")]
    Unauthorized(String),

    /// Requested order does not exist.
    #[error("{0}")]
    NotFound(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl CliError {
    /// Map error to an exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2,    // EX_USAGE
            Self::NotFound(_) => 66,    // EX_NOINPUT
            Self::Database(_) => 73,    // EX_CANTCREAT (closest fit)
            Self::Io(_) => 74,          // EX_IOERR
            Self::Auth(_) | Self::Unauthorized(_) => 77, // EX_NOPERM
            Self::Config(_) => 78,      // EX_CONFIG
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => Self::Database(repo_err.to_string()),
            CoreError::Auth(auth_err) => auth_err.into(),
            CoreError::Locale(locale_err) => Self::Arguments(locale_err.to_string()),
            CoreError::Settings(settings_err) => Self::Config(settings_err.to_string()),
            CoreError::NotFound(what) => Self::NotFound(format!("Not found: {what}")),
        }
    }
}

impl From<AuthError> for CliError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Storage(msg) => Self::Database(msg),
            other => Self::Auth(other.to_string()),
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
