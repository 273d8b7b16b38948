//! BirthdayDate value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Display and parse pattern for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts unpadded days and months, so the shape is checked first.
static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A validated calendar date in DD.MM.YYYY form.
///
/// The year is kept so the date displays exactly as it was entered, even though
/// upcoming-birthday checks only look at the day and month.
///
/// # Example
///
/// ```
/// use birthday_assistant::domain::BirthdayDate;
///
/// let birthday = BirthdayDate::new("29.02.2000").unwrap();
/// assert_eq!(birthday.to_string(), "29.02.2000");
/// assert!(BirthdayDate::new("29.02.2001").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthdayDate(NaiveDate);

impl BirthdayDate {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the input does not have the
    /// two-digit day, two-digit month, four-digit year shape, or if it names a day
    /// that does not exist (e.g. `31.04.2020`, `29.02.2023`, `01.01.0000`).
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        if !BIRTHDAY_SHAPE.is_match(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }

        match NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT) {
            Ok(date) if date.year() >= 1 => Ok(Self(date)),
            _ => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// The stored calendar date, original year included.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The same day and month in `year`.
    ///
    /// Returns `None` for a 29 February birthday re-anchored onto a non-leap year.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        self.0.with_year(year)
    }
}

impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
