//! The interactive shell loop.

use std::io::{BufRead, Write};

use chrono::Local;
use envelope_core::command::tokenize;
use envelope_core::error::{Error, Result};
use log::{debug, error};

use crate::handlers::{self, Outcome, Session};
use crate::help;
use crate::suggest;
use crate::terminal::{Terminal, Tone};

pub const BANNER: &str = r"
  ______             _____ _      _____
 |  ____|           / ____| |    |_   _|
 | |__   _ ____   _| |    | |      | |
 |  __| | '_ \ \ / / |    | |      | |
 | |____| | | \ V /| |____| |____ _| |_
 |______|_| |_|\_/  \_____|______|_____|
 ENVelope Command Line Interface
";

const PROMPT_NAME: &str = "[EnvCLI]";

/// What the loop does after one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

pub struct Repl<R, W> {
    session: Session,
    terminal: Terminal<R, W>,
    clock: bool,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(session: Session, terminal: Terminal<R, W>, clock: bool) -> Self {
        Self {
            session,
            terminal,
            clock,
        }
    }

    pub fn into_terminal(self) -> Terminal<R, W> {
        self.terminal
    }

    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn print_banner(&mut self) -> Result<()> {
        self.terminal.say(Tone::Plain, BANNER)
    }

    fn write_prompt(&mut self) -> Result<()> {
        let prompt = if self.clock {
            format!("{PROMPT_NAME} [{}] : ", Local::now().format("%H:%M:%S"))
        } else {
            format!("{PROMPT_NAME} : ")
        };
        self.terminal.prompt(&prompt)
    }

    /// Reads and runs commands until `quit` or the end of the input.
    ///
    /// # Errors
    ///
    /// Returns an error only when reading input or writing output fails. Command
    /// failures are printed and the loop goes on.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.write_prompt()?;

            let Some(line) = self.terminal.read_line()? else {
                self.terminal.say(Tone::Plain, "")?;
                self.report_error(&Error::InputClosed)?;
                return Ok(());
            };

            let tokens = tokenize(&line);
            if tokens.is_empty() {
                continue;
            }

            if self.execute(&tokens)? == Flow::Stop {
                return Ok(());
            }
        }
    }

    /// Runs one tokenized command and prints its result.
    ///
    /// # Errors
    ///
    /// Returns the command's error if it cannot be recovered from, after printing it.
    pub fn execute(&mut self, tokens: &[String]) -> Result<Flow> {
        debug!("Executing {:?}", tokens);

        match handlers::dispatch(&self.session, &mut self.terminal, tokens) {
            Ok(Outcome::Quit) => Ok(Flow::Stop),
            Ok(Outcome::Report(message)) => {
                self.terminal.show(&message)?;
                Ok(Flow::Continue)
            }
            Err(Error::InputClosed) => {
                self.report_error(&Error::InputClosed)?;
                Ok(Flow::Stop)
            }
            Err(e) if e.is_recoverable() => {
                self.report_error(&e)?;
                Ok(Flow::Continue)
            }
            Err(e) => {
                error!("Unrecoverable error: {e}");
                Err(e)
            }
        }
    }

    /// Runs a single command given on the command line.
    ///
    /// Returns whether the command succeeded. Failures are printed like in the loop.
    ///
    /// # Errors
    ///
    /// Returns an error only when reading input or writing output fails.
    pub fn execute_once(&mut self, tokens: &[String]) -> Result<bool> {
        match handlers::dispatch(&self.session, &mut self.terminal, tokens) {
            Ok(Outcome::Quit) => Ok(true),
            Ok(Outcome::Report(message)) => {
                self.terminal.show(&message)?;
                Ok(true)
            }
            Err(e) if e.is_recoverable() || matches!(e, Error::InputClosed) => {
                self.report_error(&e)?;
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    fn report_error(&mut self, e: &Error) -> Result<()> {
        self.terminal.say(Tone::Error, &e.to_string())?;

        if let Error::InvalidCommand(name) = e {
            self.terminal.say(Tone::Warning, &help::command_list())?;
            if let Some(command) = suggest::closest_command(name) {
                self.terminal
                    .say(Tone::Info, &format!("Did you mean `{command}`?"))?;
            }
        }

        Ok(())
    }
}
