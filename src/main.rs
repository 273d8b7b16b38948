//! Birthday Assistant - Main entry point
//!
//! Starts an interactive session on stdin/stdout with an empty address book.

use anyhow::Result;
use birthday_assistant::{repl, AddressBook, AssistantBot, Config, SystemClock};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logging goes to stderr so stdout stays a clean transcript
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(log_level = %config.log_level, "Configuration loaded successfully");

    let mut bot = AssistantBot::new(AddressBook::new(), SystemClock);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl::run(&mut bot, stdin.lock(), stdout.lock())?;

    info!("Session finished");
    Ok(())
}
