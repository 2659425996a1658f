//! Line-based terminal I/O for the shell.
//!
//! [`Terminal`] owns the input and output streams and the [`Theme`]. Everything the
//! shell prints or asks goes through it, so handlers can be driven from an in-memory
//! reader and writer in tests.

pub mod colors;
pub mod input;
pub mod types;

use std::io::{BufRead, Write};

use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetForegroundColor};
use envelope_core::error::Result;

pub use colors::Theme;
pub use types::{Confirmation, Message, Tone};

pub struct Terminal<R, W> {
    input: R,
    output: W,
    theme: Theme,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, theme: Theme) -> Self {
        Self {
            input,
            output,
            theme,
        }
    }

    /// Gives back the output stream, mostly so tests can inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line without its line ending. `None` means the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the input fails.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }

        let line = buffer.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(line))
    }

    fn write_colored(&mut self, tone: Tone, text: &str) -> Result<()> {
        match self.theme.color_for(tone) {
            Some(color) => queue!(
                self.output,
                SetForegroundColor(color),
                Print(text),
                ResetColor
            )?,
            None => queue!(self.output, Print(text))?,
        }
        Ok(())
    }

    /// Prints `text` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn say(&mut self, tone: Tone, text: &str) -> Result<()> {
        self.write_colored(tone, text)?;
        queue!(self.output, Print("\n"))?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints `text` without a newline, in the prompt color.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        if self.theme.enabled {
            queue!(
                self.output,
                SetForegroundColor(self.theme.prompt),
                Print(text),
                ResetColor
            )?;
        } else {
            queue!(self.output, Print(text))?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Prints a handler's final report.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn show(&mut self, message: &Message) -> Result<()> {
        self.say(message.tone, &message.text)
    }
}
