//! Handlers that act on whole env files: create, rename, delete and read.

use std::io::{BufRead, Write};
use std::path::Path;

use envelope_core::arguments::{self, SKIP_PROMPT_FLAG, SKIP_VALIDATION_FLAG, VARIABLES_FLAG};
use envelope_core::error::{Error, Result};
use envelope_core::file_handling;
use envelope_core::mutation;

use super::variables::prompt_assignments;
use super::Session;
use crate::terminal::input::is_stop_word;
use crate::terminal::{Message, Terminal, Tone};

/// `create <name> [-var <names...>] [-s]`
///
/// # Errors
///
/// Fails if the file cannot be created or a variable cannot be written.
pub fn create<R: BufRead, W: Write>(
    session: &Session,
    terminal: &mut Terminal<R, W>,
    tokens: &[String],
) -> Result<Message> {
    let path = session.env_path(&tokens[1]);

    let overwrite = file_handling::exists(&path);
    if overwrite && !terminal.confirm("File already exists! Do you want to overwrite it? (y/n)")? {
        return Ok(Message::warning("Action cancelled!"));
    }

    file_handling::create_env_file(&path, overwrite)?;

    if let Some(group) = arguments::locate(tokens, VARIABLES_FLAG) {
        let assignments = prompt_assignments(terminal, group.tokens(tokens))?;
        mutation::add_variables(&path, &assignments)?;
        return Ok(Message::success("File and variable(s) created successfully!"));
    }

    if arguments::has_flag(tokens, SKIP_PROMPT_FLAG)
        || !terminal.confirm("File created, do you want to add variable(s)? (y/n)")?
    {
        return Ok(Message::success("File created successfully!"));
    }

    let added = enter_variables(terminal, &path)?;
    Ok(Message::success(format!(
        "File and {added} variable(s) created successfully!"
    )))
}

/// Asks for name/value pairs until a stop word, appending each pair right away.
fn enter_variables<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    path: &Path,
) -> Result<usize> {
    let mut added = 0;
    terminal.say(
        Tone::Info,
        "Write the first variable name: (stop with \"q\" or \"quit\")",
    )?;

    loop {
        let name = terminal.read_answer()?;
        if is_stop_word(&name) {
            break;
        }
        if name.is_empty() {
            continue;
        }

        let value = terminal.ask(&format!("Value of variable {name}:"))?;
        if is_stop_word(&value) {
            break;
        }

        file_handling::append_variable(path, &name, &value)?;
        added += 1;
        terminal.say(Tone::Success, &format!("Variable {name} added to env."))?;
        terminal.say(
            Tone::Info,
            "Write the next variable name: (stop with \"q\" or \"quit\")",
        )?;
    }

    Ok(added)
}

/// `rename <name> [<newName>]`
///
/// # Errors
///
/// Fails if the file is missing, no new name is given, or the target exists.
pub fn rename<R: BufRead, W: Write>(
    session: &Session,
    terminal: &mut Terminal<R, W>,
    tokens: &[String],
) -> Result<Message> {
    let path = session.env_path(&tokens[1]);
    file_handling::ensure_exists(&path)?;

    let new_name = match tokens.get(2) {
        Some(new_name) => new_name.clone(),
        None => terminal.ask("Enter a new file name.")?,
    };
    if new_name.is_empty() {
        return Err(Error::missing_argument("rename", "No name has been given!"));
    }

    let new_path = session.env_path(&new_name);
    file_handling::rename_env_file(&path, &new_path)?;

    Ok(Message::success(format!(
        "{} has been renamed to {}",
        path.display(),
        new_path.display()
    )))
}

/// `delete <name> [-v]`
///
/// # Errors
///
/// Fails if the file is missing or cannot be removed.
pub fn delete<R: BufRead, W: Write>(
    session: &Session,
    terminal: &mut Terminal<R, W>,
    tokens: &[String],
) -> Result<Message> {
    let path = session.env_path(&tokens[1]);
    file_handling::ensure_exists(&path)?;

    if !arguments::has_flag(tokens, SKIP_VALIDATION_FLAG)
        && !terminal.confirm(&format!(
            "Are you sure you want to delete {} (y/n)?",
            path.display()
        ))?
    {
        return Ok(Message::success("File not deleted!"));
    }

    file_handling::delete_env_file(&path)?;
    Ok(Message::success(format!(
        "{} has been successfully deleted!",
        path.display()
    )))
}

/// `read <name>`
///
/// # Errors
///
/// Fails if the file is missing or unreadable.
pub fn read<R: BufRead, W: Write>(
    session: &Session,
    terminal: &mut Terminal<R, W>,
    tokens: &[String],
) -> Result<Message> {
    let path = session.env_path(&tokens[1]);
    let content = file_handling::read_content(&path)?;

    terminal.say(
        Tone::Success,
        &format!("Here is the content of {}:", path.display()),
    )?;
    Ok(Message::plain(content))
}
