//! Configuration errors.
//!
//! All errors produced by the config module (validation and env loading) use
//! [`ConfigError`]. Callers can match on variants or use
//! [`ConfigError::message`] for logging.

use std::fmt;

/// Errors produced when building or validating configuration.
///
/// # Variants
///
/// - **Validation**: Configuration values are inconsistent or out of range
///   (e.g. a zero hidden size, a dropout rate of 1.0).
///   *When*: After building a `Config` and calling `validate()`.
///   *Recovery*: Fix the values so that `validate()` passes; the message
///   names the rule that failed.
///
/// - **EnvVar**: An environment variable could not be read (e.g. invalid
///   Unicode).
///   *Recovery*: Ensure the variable contains valid Unicode.
///
/// - **Parse**: An environment variable was set but could not be parsed into
///   the expected type (e.g. `NAMEGEN_SEED=abc`).
///   *Recovery*: Set a valid value or unset the variable to use the default.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Configuration validation failed (e.g. invalid dimensions or ranges).
    Validation(String),

    /// Failed to read an environment variable.
    EnvVar {
        /// The full environment variable name that was read.
        key: String,
        /// Underlying cause (e.g. NotUnicode).
        message: String,
    },

    /// Environment variable was set but could not be parsed.
    Parse {
        /// The full environment variable name.
        key: String,
        /// The raw value that failed to parse.
        value: String,
        /// Human-readable parse reason (e.g. "invalid digit").
        message: String,
    },
}

impl ConfigError {
    /// Returns a short message suitable for logging or user display.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            ConfigError::Validation(m) => m,
            ConfigError::EnvVar { message, .. } => message,
            ConfigError::Parse { message, .. } => message,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Validation(m) => write!(f, "config validation: {m}"),
            ConfigError::EnvVar { key, message } => write!(f, "env var {key}: {message}"),
            ConfigError::Parse {
                key,
                value,
                message,
            } => {
                write!(f, "env var {key}={value:?}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
