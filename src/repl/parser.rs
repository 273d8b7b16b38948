//! Tokenizer for REPL input lines.

/// Commands understood by the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    /// `close` or `exit`
    Exit,
    /// Anything else, including an empty line
    Unknown(String),
}

impl Command {
    /// Map an already lowercased command word to a command.
    pub fn from_name(name: &str) -> Self {
        match name {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "close" | "exit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// A tokenized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: Command,
    pub args: Vec<String>,
}

/// Split a line into a command and its positional arguments.
///
/// The whole line is trimmed and lowercased before splitting on whitespace, so
/// contact names are effectively case-insensitive.
pub fn parse_input(line: &str) -> ParsedInput {
    let normalized = line.trim().to_lowercase();
    let mut tokens = normalized.split_whitespace().map(str::to_string);

    let command = match tokens.next() {
        Some(word) => Command::from_name(&word),
        None => Command::Unknown(String::new()),
    };

    ParsedInput {
        command,
        args: tokens.collect(),
    }
}
