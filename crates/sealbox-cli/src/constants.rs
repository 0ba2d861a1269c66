//! Constants used throughout the CLI.

/// Environment variable holding the passphrase for non-interactive use.
pub const PASSPHRASE_ENV: &str = "SEALBOX_PASSPHRASE";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "SEALBOX_LOG";

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells and clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Input file or config file not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input, including malformed containers.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (wrong passphrase or tampered container).
    pub const AUTH_FAILED: i32 = 5;
}
