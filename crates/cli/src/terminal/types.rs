//! Message types produced by command handlers.

use std::fmt::{Display, Formatter};

/// The role a piece of output plays, which selects its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Warning,
    Info,
    Plain,
}

/// The final report of a command, rendered by the REPL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub tone: Tone,
    pub text: String,
}

impl Message {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Tone::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Tone::Warning, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Tone::Info, text)
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(Tone::Plain, text)
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// An answer to a yes/no question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
    Unknown(String),
}

impl Confirmation {
    /// Only `y`/`Y` and `n`/`N` are understood; anything else is kept as unknown.
    #[must_use]
    pub fn parse(answer: &str) -> Self {
        match answer.trim() {
            "y" | "Y" => Confirmation::Yes,
            "n" | "N" => Confirmation::No,
            other => Confirmation::Unknown(other.to_string()),
        }
    }
}
