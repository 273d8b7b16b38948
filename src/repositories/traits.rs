use crate::domain::ContactName;
use crate::error::AssistantResult;
use crate::models::Record;
use chrono::{Datelike, Days, NaiveDate};
use std::fmt;

/// A contact whose birthday falls inside the upcoming window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// The birthday re-anchored onto the current year
    pub date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date.format("%d.%m"))
    }
}

/// Repository for managing contact records.
///
/// Provides abstraction over record storage so the command handlers can be
/// exercised against an in-memory book or a test double.
pub trait ContactRepository {
    /// Register an empty record under `name` and return it for population.
    ///
    /// Fails with `AssistantError::AlreadyExists` if the name is taken.
    fn add_record(&mut self, name: ContactName) -> AssistantResult<&mut Record>;

    /// Look up a record by name.
    fn find(&self, name: &str) -> Option<&Record>;

    /// Look up a record by name for in-place edits.
    fn find_mut(&mut self, name: &str) -> Option<&mut Record>;

    /// Remove a record. Deleting an unknown name is a no-op and returns `None`.
    fn delete(&mut self, name: &str) -> Option<Record>;

    /// All records in insertion order.
    fn list_all(&self) -> Vec<&Record>;

    /// Contacts whose birthday, moved onto `today`'s year, lies within
    /// `today ..= today + horizon_days`.
    ///
    /// Results keep the order of [`list_all`](Self::list_all). A birthday that
    /// already passed this year is not rolled over into next year, so early-January
    /// birthdays are never reported from late December.
    fn upcoming_birthdays(&self, today: NaiveDate, horizon_days: u64) -> Vec<UpcomingBirthday> {
        let Some(window_end) = today.checked_add_days(Days::new(horizon_days)) else {
            return Vec::new();
        };

        self.list_all()
            .into_iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let Some(candidate) = birthday.in_year(today.year()) else {
                    tracing::debug!(
                        contact = %record.name(),
                        "Skipping 29 February birthday in a common year"
                    );
                    return None;
                };

                (today <= candidate && candidate <= window_end).then(|| UpcomingBirthday {
                    name: record.name().to_string(),
                    date: candidate,
                })
            })
            .collect()
    }
}
