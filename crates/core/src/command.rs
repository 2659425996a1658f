use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::arguments::FLAG_MARKER;
use crate::error::Error;

/// The operations the shell understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Create,
    Get,
    Rename,
    Delete,
    Read,
    Add,
    Remove,
    Update,
    Help,
    Quit,
}

impl Command {
    pub const ALL: [Command; 10] = [
        Command::Create,
        Command::Get,
        Command::Rename,
        Command::Delete,
        Command::Read,
        Command::Add,
        Command::Remove,
        Command::Update,
        Command::Help,
        Command::Quit,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Command::Create => "create",
            Command::Get => "get",
            Command::Rename => "rename",
            Command::Delete => "delete",
            Command::Read => "read",
            Command::Add => "add",
            Command::Remove => "remove",
            Command::Update => "update",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }

    /// Every spelling accepted for the command, without the flag marker.
    #[must_use]
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Command::Help => &["help", "man", "h"],
            Command::Quit => &["quit", "q"],
            Command::Create => &["create"],
            Command::Get => &["get"],
            Command::Rename => &["rename"],
            Command::Delete => &["delete"],
            Command::Read => &["read"],
            Command::Add => &["add"],
            Command::Remove => &["remove"],
            Command::Update => &["update"],
        }
    }

    /// Commands that operate on an env file and need its name as first argument.
    #[must_use]
    pub fn requires_file(self) -> bool {
        !matches!(self, Command::Help | Command::Quit)
    }
}

impl Display for Command {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = Error;

    /// Parses a command name, with or without the leading flag marker.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let name = token.strip_prefix(FLAG_MARKER).unwrap_or(token);

        Command::ALL
            .into_iter()
            .find(|command| command.aliases().contains(&name))
            .ok_or_else(|| Error::InvalidCommand(token.to_string()))
    }
}

/// Splits a raw input line into tokens.
#[must_use]
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(ToString::to_string).collect()
}
