//! Source of the current date for birthday queries.

use chrono::{Local, NaiveDate};

/// Supplies "today" to the command handlers.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the machine running the assistant.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
