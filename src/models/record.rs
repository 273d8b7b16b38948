//! Record model representing a single contact in the address book.

use crate::domain::{BirthdayDate, ContactName, PhoneNumber, ValidationError};
use std::fmt;

/// Marker shown by [`Record::describe`] when no birthday is set.
pub const NO_BIRTHDAY: &str = "No birthday";

/// A contact: an immutable name, zero or more phones and an optional birthday.
///
/// Every stored phone has passed [`PhoneNumber`] validation. Duplicate phones are
/// not rejected here; callers decide whether a duplicate is acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Option<BirthdayDate>,
}

impl Record {
    /// Create an empty record (no phones, no birthday).
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Phones in the order they were added.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&BirthdayDate> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `raw` is not 10 digits; the
    /// phone list is left untouched.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.push_phone(phone);
        Ok(())
    }

    /// Append an already validated phone.
    pub fn push_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Remove every phone whose text equals `raw`. Removing an unknown phone is a no-op.
    pub fn remove_phone(&mut self, raw: &str) {
        self.phones.retain(|phone| phone.as_str() != raw);
    }

    /// First phone whose text equals `raw`.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == raw)
    }

    /// Validate `raw` and store it as the birthday, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` on a malformed date; the previous
    /// birthday (if any) is kept.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(BirthdayDate::new(raw)?);
        Ok(())
    }

    /// Phones joined with `"; "`; empty string when there are none.
    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// One-line human readable summary used by the `all` command.
    pub fn describe(&self) -> String {
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| NO_BIRTHDAY.to_string());

        format!(
            "Contact name: {}, phones: {}, birthday: {}",
            self.name,
            self.phones_joined(),
            birthday
        )
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
