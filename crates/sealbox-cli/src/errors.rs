//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use sealbox_core::SealError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (input file, config file)
    NotFound { message: String, hint: String },

    /// Authentication failed (wrong passphrase or tampered data)
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::AuthFailed { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\n{}", message, h)
                } else {
                    write!(f, "{}", message)
                }
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an AuthFailed error with message and hint.
    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Map a core failure to the CLI error a user should see.
///
/// Errors with no user-facing category stay as generic `anyhow` errors.
pub fn from_seal_error(err: SealError) -> anyhow::Error {
    match err {
        SealError::AuthenticationFailed => CliError::auth_failed_with_hint(
            err.to_string(),
            "Hint: check the passphrase, and that kdf.iterations matches the value used to encrypt.",
        )
        .into(),
        SealError::MalformedContainer(detail) => CliError::invalid_input(format!(
            "Input is not a sealbox container: {}",
            detail
        ))
        .into(),
        other => anyhow::Error::new(other),
    }
}

/// Exit code for any error surfaced from `run`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>()
        .map(CliError::exit_code)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failure_maps_to_auth_exit_code() {
        let err = from_seal_error(SealError::AuthenticationFailed);
        assert_eq!(exit_code_for(&err), exit_codes::AUTH_FAILED);
        assert!(err.to_string().contains("Hint:"));
    }

    #[test]
    fn test_malformed_maps_to_invalid_input() {
        let err = from_seal_error(SealError::MalformedContainer("too short".into()));
        assert_eq!(exit_code_for(&err), exit_codes::INVALID_INPUT);
        assert!(err.to_string().contains("too short"));
    }

    #[test]
    fn test_other_errors_are_generic() {
        let err = from_seal_error(SealError::KeyDerivation("bad params".into()));
        assert_eq!(exit_code_for(&err), 1);
    }

    #[test]
    fn test_not_found_display_includes_hint() {
        let err = CliError::not_found("Input file not found: x", "Hint: check the path.");
        assert_eq!(err.to_string(), "Input file not found: x\nHint: check the path.");
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
    }
}
