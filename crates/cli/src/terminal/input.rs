use std::io::{BufRead, Write};

use envelope_core::error::{Error, Result};
use log::warn;

use super::types::{Confirmation, Tone};
use super::Terminal;

/// Answers that end an interactive entry loop.
const STOP_WORDS: [&str; 2] = ["q", "quit"];

#[must_use]
pub fn is_stop_word(answer: &str) -> bool {
    STOP_WORDS.contains(&answer)
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Reads the next answer, trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] when the input is exhausted.
    pub fn read_answer(&mut self) -> Result<String> {
        match self.read_line()? {
            Some(line) => Ok(line.trim().to_string()),
            None => Err(Error::InputClosed),
        }
    }

    /// Shows `question` and returns the trimmed answer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] when the input is exhausted.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        self.say(Tone::Warning, question)?;
        self.read_answer()
    }

    /// Asks a yes/no question.
    ///
    /// Anything other than `y`/`Y`/`n`/`N` counts as a decline and prints a warning;
    /// the question is not repeated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] when the input is exhausted.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(question)?;

        match Confirmation::parse(&answer) {
            Confirmation::Yes => Ok(true),
            Confirmation::No => Ok(false),
            Confirmation::Unknown(answer) => {
                warn!("Unknown confirmation answer `{}`, declining", answer);
                let message = Error::UnknownResponse(answer).to_string();
                self.say(Tone::Warning, &message)?;
                Ok(false)
            }
        }
    }
}
