//! Birthday Assistant - an interactive command-line contact book.
//!
//! Contacts (name, phone numbers, birthday) are kept in memory for the length of
//! the session and managed through short text commands. The assistant can also
//! report which contacts have a birthday in the coming week.
//!
//! # Architecture
//!
//! - **domain**: Validated value types for names, phones and birthdays
//! - **models**: The contact record
//! - **repositories**: Insertion-ordered contact store and birthday queries
//! - **repl**: Tokenizer, command handlers and the read-eval-print loop
//! - **clock**: Source of today's date
//! - **config**: Configuration from environment variables
//! - **error**: Error types surfaced to the user

pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod repositories;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{AssistantError, AssistantResult, ConfigError};
pub use models::Record;
pub use repl::{AssistantBot, Outcome};
pub use repositories::{AddressBook, ContactRepository, UpcomingBirthday};
