//! Error types for the birthday assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The `Display` text of [`AssistantError`] is exactly what the user sees in the REPL.

use crate::domain::ValidationError;
use thiserror::Error;

/// Hint printed when `add` or `change` lacks a name or phone.
pub const HINT_NAME_AND_PHONE: &str = "Give me name and phone please.";

/// Hint printed when `add-birthday` lacks a name or date.
pub const HINT_NAME_AND_BIRTHDAY: &str = "Give me name and date of birth please.";

/// Hint printed when a single-argument command gets none.
pub const HINT_MORE_ARGUMENTS: &str = "Command requires more arguments.";

/// Errors a command handler can return.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    /// Malformed phone number or birthday
    #[error("{0}")]
    InvalidFormat(#[from] ValidationError),

    /// No contact with the given name
    #[error("Contact not found.")]
    NotFound(String),

    /// A contact with the given name is already registered
    #[error("Contact already exists.")]
    AlreadyExists(String),

    /// Fewer positional arguments than the command needs
    #[error("{hint}")]
    MissingArguments { hint: &'static str },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AssistantError
pub type AssistantResult<T> = Result<T, AssistantError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
