//! ContactName value object.

use super::errors::ValidationError;
use std::fmt;

/// A type-safe wrapper for contact names.
///
/// Names are the unique key of the address book and cannot be empty.
///
/// # Example
///
/// ```
/// use birthday_assistant::domain::ContactName;
///
/// let name = ContactName::new("alice").unwrap();
/// assert_eq!(name.as_str(), "alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the provided name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_name_valid() {
        let name = ContactName::new("bob").unwrap();
        assert_eq!(name.as_str(), "bob");
        assert_eq!(name.to_string(), "bob");
    }

    #[test]
    fn test_contact_name_empty_fails() {
        assert_eq!(ContactName::new(""), Err(ValidationError::EmptyName));
    }
}
