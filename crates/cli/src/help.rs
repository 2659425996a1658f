//! Built-in usage texts for the `help` command.

use envelope_core::command::Command;
use envelope_core::error::Result;
use itertools::Itertools;

use crate::terminal::Message;

const SEPARATOR: &str = "-------------------------------------";

/// Order in which the full help listing shows the commands.
const LISTING_ORDER: [Command; 10] = [
    Command::Create,
    Command::Update,
    Command::Delete,
    Command::Rename,
    Command::Remove,
    Command::Get,
    Command::Read,
    Command::Add,
    Command::Help,
    Command::Quit,
];

#[must_use]
pub fn usage(command: Command) -> &'static str {
    match command {
        Command::Create => {
            "[HELP - CREATE COMMAND - EnvCLI]
Usage: create [FILE NAME] [OPTIONS]
Options:
    -var []  | List of default variables to add.
    -s       | Skip variable(s) prompt.

-> Create a .env file."
        }
        Command::Update => {
            "[HELP - UPDATE COMMAND - EnvCLI]
Usage: update [FILE NAME] -var [VARIABLE(S)] [OPTIONS]
Options:
    -p       | Create confirmation message for every variable.

-> Update .env file variable values."
        }
        Command::Delete => {
            "[HELP - DELETE COMMAND - EnvCLI]
Usage: delete [FILE NAME] [OPTIONS]
Options:
    -v       | Skip validation.

-> Delete a file."
        }
        Command::Rename => {
            "[HELP - RENAME COMMAND - EnvCLI]
Usage: rename [FILE NAME] [NEW NAME]

-> Rename a file."
        }
        Command::Remove => {
            "[HELP - REMOVE COMMAND - EnvCLI]
Usage: remove [FILE NAME] -var [VARIABLE(S)]

-> Remove variable(s) from the .env file."
        }
        Command::Get => {
            "[HELP - GET COMMAND - EnvCLI]
Usage: get [FILE NAME] [VARIABLE(S)]

-> Return a list of occurrences of the given variable(s)."
        }
        Command::Read => {
            "[HELP - READ COMMAND - EnvCLI]
Usage: read [FILE NAME]

-> Return the content of the .env file."
        }
        Command::Add => {
            "[HELP - ADD COMMAND - EnvCLI]
Usage: add [FILE NAME] -var [VAR(S)]

-> Add variable(s) to a .env file."
        }
        Command::Help => {
            "[HELP - HELP COMMAND - EnvCLI]
Usage: help [COMMAND]
Aliases: man, h

-> Show the usage of one command, or of all of them."
        }
        Command::Quit => {
            "[HELP - QUIT COMMAND - EnvCLI]
Usage: quit
Aliases: q

-> Leave EnvCLI."
        }
    }
}

/// The usage of `topic`, or of every command when no topic is given.
///
/// Commands are accepted with or without their leading `-`.
///
/// # Errors
///
/// Returns [`envelope_core::error::Error::InvalidCommand`] if `topic` names no command.
pub fn help(topic: Option<&str>) -> Result<Message> {
    let text = match topic {
        Some(topic) => usage(topic.parse()?).to_string(),
        None => LISTING_ORDER
            .iter()
            .map(|command| usage(*command))
            .join(&format!("\n{SEPARATOR}\n")),
    };

    Ok(Message::info(text))
}

/// One line naming every command, shown after an unknown command.
#[must_use]
pub fn command_list() -> String {
    format!(
        "List of commands: {}",
        Command::ALL.iter().map(|command| command.name()).join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use envelope_core::error::Error;

    #[test]
    fn test_help_for_one_command() {
        let message = help(Some("update")).unwrap();
        assert!(message.text.starts_with("[HELP - UPDATE COMMAND - EnvCLI]"));
        assert!(message.text.contains("-p"));
        assert!(!message.text.contains(SEPARATOR));
    }

    #[test]
    fn test_help_accepts_marker_and_aliases() {
        assert_eq!(help(Some("-get")).unwrap(), help(Some("get")).unwrap());
        assert_eq!(help(Some("q")).unwrap(), help(Some("quit")).unwrap());
    }

    #[test]
    fn test_help_for_everything() {
        let message = help(None).unwrap();

        for command in Command::ALL {
            assert!(message.text.contains(usage(command)));
        }
        assert_eq!(message.text.matches(SEPARATOR).count(), Command::ALL.len() - 1);
        assert!(message.text.starts_with("[HELP - CREATE COMMAND - EnvCLI]"));
    }

    #[test]
    fn test_help_unknown_topic() {
        let result = help(Some("explode"));
        assert!(matches!(result, Err(Error::InvalidCommand(name)) if name == "explode"));
    }

    #[test]
    fn test_command_list() {
        assert_eq!(
            command_list(),
            "List of commands: create, get, rename, delete, read, add, remove, update, help, quit"
        );
    }
}
