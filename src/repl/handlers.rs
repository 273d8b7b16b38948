//! Command handlers for the assistant.
//!
//! Every handler returns an [`AssistantResult`]; [`AssistantBot::execute`] turns
//! both outcomes into the line printed to the user, so no input can stop the loop.

use super::parser::{parse_input, Command, ParsedInput};
use crate::clock::Clock;
use crate::domain::{ContactName, PhoneNumber};
use crate::error::{
    AssistantError, AssistantResult, HINT_MORE_ARGUMENTS, HINT_NAME_AND_BIRTHDAY,
    HINT_NAME_AND_PHONE,
};
use crate::repositories::ContactRepository;

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Goodbye!";
pub const INVALID_COMMAND: &str = "Invalid command.";
pub const EMPTY_BOOK: &str = "Address book is empty.";
pub const NO_BIRTHDAY_SET: &str = "No birthday set for this contact.";
pub const NO_UPCOMING_BIRTHDAYS: &str = "No upcoming birthdays in the next week.";

/// Days after today covered by the `birthdays` command.
pub const BIRTHDAY_HORIZON_DAYS: u64 = 7;

/// What the loop should do after a line was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the message and wait for the next command.
    Reply(String),
    /// Print the message and stop.
    Exit(String),
}

/// Dispatches parsed commands against a contact store.
pub struct AssistantBot<R, C> {
    repo: R,
    clock: C,
}

impl<R: ContactRepository, C: Clock> AssistantBot<R, C> {
    pub fn new(repo: R, clock: C) -> Self {
        Self { repo, clock }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Tokenize and execute one input line.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        self.execute(parse_input(line))
    }

    /// Execute a parsed command, converting any handler error into its message.
    pub fn execute(&mut self, input: ParsedInput) -> Outcome {
        let ParsedInput { command, args } = input;
        tracing::debug!(?command, arg_count = args.len(), "Dispatching command");

        let result = match command {
            Command::Exit => return Outcome::Exit(FAREWELL.to_string()),
            Command::Hello => Ok(GREETING.to_string()),
            Command::Add => self.add_contact(&args),
            Command::Change => self.change_contact(&args),
            Command::Phone => self.show_phone(&args),
            Command::All => Ok(self.show_all()),
            Command::AddBirthday => self.add_birthday(&args),
            Command::ShowBirthday => self.show_birthday(&args),
            Command::Birthdays => Ok(self.birthdays()),
            Command::Unknown(name) => {
                tracing::debug!(command = %name, "Unknown command");
                Ok(INVALID_COMMAND.to_string())
            }
        };

        match result {
            Ok(message) => Outcome::Reply(message),
            Err(e) => {
                tracing::warn!(error = ?e, "Command failed");
                Outcome::Reply(e.to_string())
            }
        }
    }

    fn add_contact(&mut self, args: &[String]) -> AssistantResult<String> {
        let [name, phone] = required_args::<2>(args, HINT_NAME_AND_PHONE)?;
        let phone = PhoneNumber::new(phone.as_str())?;

        if self.repo.find(name).is_some() {
            return Err(AssistantError::AlreadyExists(name.clone()));
        }

        let name = ContactName::new(name.as_str())?;
        self.repo.add_record(name)?.push_phone(phone);
        Ok("Contact added.".to_string())
    }

    /// Drops the first stored phone (and any copies of it) and appends the new one.
    fn change_contact(&mut self, args: &[String]) -> AssistantResult<String> {
        let [name, new_phone] = required_args::<2>(args, HINT_NAME_AND_PHONE)?;
        let new_phone = PhoneNumber::new(new_phone.as_str())?;

        let record = self
            .repo
            .find_mut(name)
            .ok_or_else(|| AssistantError::NotFound(name.clone()))?;

        if let Some(first) = record.phones().first().map(|p| p.as_str().to_string()) {
            record.remove_phone(&first);
        }
        record.push_phone(new_phone);

        Ok("Contact updated.".to_string())
    }

    fn show_phone(&self, args: &[String]) -> AssistantResult<String> {
        let [name] = required_args::<1>(args, HINT_MORE_ARGUMENTS)?;
        let record = self
            .repo
            .find(name)
            .ok_or_else(|| AssistantError::NotFound(name.clone()))?;
        Ok(record.phones_joined())
    }

    fn show_all(&self) -> String {
        let records = self.repo.list_all();
        if records.is_empty() {
            return EMPTY_BOOK.to_string();
        }

        records
            .iter()
            .map(|record| record.describe())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn add_birthday(&mut self, args: &[String]) -> AssistantResult<String> {
        let [name, birthday] = required_args::<2>(args, HINT_NAME_AND_BIRTHDAY)?;
        let record = self
            .repo
            .find_mut(name)
            .ok_or_else(|| AssistantError::NotFound(name.clone()))?;
        record.set_birthday(birthday)?;
        Ok("Birthday added.".to_string())
    }

    fn show_birthday(&self, args: &[String]) -> AssistantResult<String> {
        let [name] = required_args::<1>(args, HINT_MORE_ARGUMENTS)?;
        let record = self
            .repo
            .find(name)
            .ok_or_else(|| AssistantError::NotFound(name.clone()))?;

        Ok(match record.birthday() {
            Some(birthday) => format!("Birthday: {}", birthday),
            None => NO_BIRTHDAY_SET.to_string(),
        })
    }

    fn birthdays(&self) -> String {
        let today = self.clock.today();
        let upcoming = self.repo.upcoming_birthdays(today, BIRTHDAY_HORIZON_DAYS);
        tracing::debug!(%today, count = upcoming.len(), "Upcoming birthdays computed");

        if upcoming.is_empty() {
            return NO_UPCOMING_BIRTHDAYS.to_string();
        }

        let lines: Vec<String> = upcoming.iter().map(|u| u.to_string()).collect();
        format!("Upcoming birthdays:\n{}", lines.join("\n"))
    }
}

/// First `N` positional arguments; extra arguments are ignored.
fn required_args<'a, const N: usize>(
    args: &'a [String],
    hint: &'static str,
) -> AssistantResult<&'a [String; N]> {
    args.get(..N)
        .and_then(|head| head.try_into().ok())
        .ok_or(AssistantError::MissingArguments { hint })
}
