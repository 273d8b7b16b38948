//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
///
/// Both `InvalidPhone` and `InvalidBirthday` are format errors; the command layer
/// surfaces them as `AssistantError::InvalidFormat`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    #[error("Contact name cannot be empty.")]
    EmptyName,

    /// The provided phone number is not exactly 10 decimal digits.
    #[error("Invalid phone number format. Please provide 10 digits.")]
    InvalidPhone(String),

    /// The provided birthday does not match DD.MM.YYYY or is not a real date.
    #[error("Invalid birthday format. Please provide DD.MM.YYYY.")]
    InvalidBirthday(String),
}
