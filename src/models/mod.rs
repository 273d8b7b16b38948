//! Data models for the address book.
//!
//! A [`Record`] owns one contact's name, phone list and optional birthday.

pub mod record;

pub use record::{Record, NO_BIRTHDAY};
