//! Read-eval-print loop driving the assistant.
//!
//! The loop is generic over its input and output so sessions can be scripted in
//! tests. Handler failures never escape: each command produces a line of output
//! and the loop returns to waiting for the next command. Only `close`, `exit` or
//! end of input stop it.

pub mod handlers;
pub mod parser;

pub use handlers::{AssistantBot, Outcome};
pub use parser::{parse_input, Command, ParsedInput};

use crate::clock::Clock;
use crate::repositories::ContactRepository;
use std::io::{self, BufRead, Write};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Run the interactive session until an exit command or end of input.
///
/// A line that is not valid UTF-8 is answered with `Invalid command.` and the
/// session carries on.
///
/// # Errors
///
/// Only I/O failures on `input` or `output` are returned.
pub fn run<R, C, I, O>(bot: &mut AssistantBot<R, C>, mut input: I, mut output: O) -> io::Result<()>
where
    R: ContactRepository,
    C: Clock,
    I: BufRead,
    O: Write,
{
    writeln!(output, "{}", WELCOME)?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            tracing::info!("End of input, leaving the session");
            writeln!(output)?;
            writeln!(output, "{}", handlers::FAREWELL)?;
            break;
        }

        let outcome = match std::str::from_utf8(&buf) {
            Ok(line) => bot.handle_line(line),
            Err(e) => {
                tracing::warn!(error = %e, "Input line is not valid UTF-8");
                Outcome::Reply(handlers::INVALID_COMMAND.to_string())
            }
        };

        match outcome {
            Outcome::Reply(message) => writeln!(output, "{}", message)?,
            Outcome::Exit(message) => {
                writeln!(output, "{}", message)?;
                break;
            }
        }
    }

    output.flush()
}
