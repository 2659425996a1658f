//! Command dispatch.
//!
//! Each handler receives the full token list (command name first, file name second)
//! and returns the [`Message`] the REPL prints. Intermediate progress, questions and
//! per-variable results are written to the [`Terminal`] as they happen.

pub mod files;
pub mod variables;

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use envelope_core::command::Command;
use envelope_core::error::{Error, Result};
use envelope_core::file_handling::{self, WriteMode};
use envelope_core::settings::Settings;
use log::debug;

use crate::help;
use crate::terminal::{Message, Terminal};

/// Where env files live and how they are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub directory: PathBuf,
    pub write_mode: WriteMode,
}

impl Session {
    pub fn new(directory: impl Into<PathBuf>, write_mode: WriteMode) -> Self {
        Self {
            directory: directory.into(),
            write_mode,
        }
    }

    #[must_use]
    pub fn from_settings(settings: &Settings, directory_arg: Option<&str>) -> Self {
        let directory = envelope_core::config::resolve_directory(
            directory_arg,
            settings.directory.as_deref(),
        );
        Self::new(directory, settings.write_mode())
    }

    /// Path of the env file called `name`, with the `.env` extension ensured.
    #[must_use]
    pub fn env_path(&self, name: &str) -> PathBuf {
        file_handling::env_file_path(&self.directory, name)
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

/// What the REPL should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Report(Message),
    Quit,
}

/// Parses the command name and routes to its handler.
///
/// # Errors
///
/// Returns [`Error::InvalidCommand`] for an unknown command name,
/// [`Error::MissingArgument`] when a file command has no file name, or whatever the
/// handler fails with.
pub fn dispatch<R: BufRead, W: Write>(
    session: &Session,
    terminal: &mut Terminal<R, W>,
    tokens: &[String],
) -> Result<Outcome> {
    let Some(name) = tokens.first() else {
        return Err(Error::InvalidCommand(String::new()));
    };
    let command: Command = name.parse()?;
    debug!("Dispatching {} with {:?}", command, tokens);

    if command.requires_file() && tokens.len() < 2 {
        return Err(Error::missing_argument(
            command.name(),
            "Expected one argument!",
        ));
    }

    let message = match command {
        Command::Quit => return Ok(Outcome::Quit),
        Command::Help => help::help(tokens.get(1).map(String::as_str))?,
        Command::Create => files::create(session, terminal, tokens)?,
        Command::Rename => files::rename(session, terminal, tokens)?,
        Command::Delete => files::delete(session, terminal, tokens)?,
        Command::Read => files::read(session, terminal, tokens)?,
        Command::Get => variables::get(session, terminal, tokens)?,
        Command::Add => variables::add(session, terminal, tokens)?,
        Command::Remove => variables::remove(session, terminal, tokens)?,
        Command::Update => variables::update(session, terminal, tokens)?,
    };

    Ok(Outcome::Report(message))
}
