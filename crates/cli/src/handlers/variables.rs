//! Handlers that act on the variables inside an env file: get, add, remove, update.
//!
//! Values and confirmations are gathered here and handed to
//! [`envelope_core::mutation`] as plain data.

use std::io::{BufRead, Write};

use envelope_core::arguments::{self, PROMPT_EACH_FLAG, VARIABLES_FLAG};
use envelope_core::command::Command;
use envelope_core::error::{Error, Result};
use envelope_core::file_handling;
use envelope_core::mutation::{self, Assignment, RemovalPlan, UpdatePlan};
use envelope_core::query;
use log::debug;

use super::Session;
use crate::terminal::{Message, Terminal, Tone};

/// The names of the `-var` group, which must be present and non-empty.
fn variable_names<'a>(tokens: &'a [String], command: Command) -> Result<&'a [String]> {
    let usage = format!(
        "expected `{VARIABLES_FLAG}` followed by variable names, see `help {command}`"
    );

    let group = arguments::locate(tokens, VARIABLES_FLAG)
        .ok_or_else(|| Error::missing_argument(command.name(), &usage))?;

    if group.is_empty() {
        return Err(Error::missing_argument(command.name(), &usage));
    }

    Ok(group.tokens(tokens))
}

/// Asks for a value for every name, in order.
pub(crate) fn prompt_assignments<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    names: &[String],
) -> Result<Vec<Assignment>> {
    let mut assignments = Vec::with_capacity(names.len());
    for name in names {
        let value = terminal.ask(&format!("Insert value for variable {name}:"))?;
        assignments.push(Assignment::new(name.as_str(), value));
    }

    Ok(assignments)
}

/// `get <name> [<variable>...]`
///
/// # Errors
///
/// Fails if the file cannot be read or no reference matches any line.
pub fn get<R: BufRead, W: Write>(
    session: &Session,
    terminal: &mut Terminal<R, W>,
    tokens: &[String],
) -> Result<Message> {
    let path = session.env_path(&tokens[1]);
    let content = file_handling::read_content(&path)?;

    let mut references: Vec<String> = tokens
        .iter()
        .skip(2)
        .filter(|token| !arguments::is_flag(token))
        .cloned()
        .collect();
    if references.is_empty() {
        references.push(terminal.ask("Enter variable name:")?);
    }

    let mut matches = Vec::new();
    let mut missing = Vec::new();
    for reference in &references {
        match query::query(reference, &content) {
            Ok(found) => matches.extend(found),
            Err(Error::VariableNotFound(reference)) => missing.push(reference),
            Err(e) => return Err(e),
        }
    }

    if matches.is_empty() {
        return Err(Error::VariableNotFound(missing.join(", ")));
    }

    for reference in missing {
        terminal.say(Tone::Warning, &Error::VariableNotFound(reference).to_string())?;
    }

    Ok(Message::success(format!(
        "Variable(s)/Value found!\n{}",
        query::format_matches(&matches)
    )))
}

/// `add <name> -var <names...>`
///
/// # Errors
///
/// Fails if the file is missing, the `-var` group is absent or empty, or a write
/// fails. Variables appended before a failed write stay in the file.
pub fn add<R: BufRead, W: Write>(
    session: &Session,
    terminal: &mut Terminal<R, W>,
    tokens: &[String],
) -> Result<Message> {
    let path = session.env_path(&tokens[1]);
    file_handling::ensure_exists(&path)?;
    let names = variable_names(tokens, Command::Add)?;

    let assignments = prompt_assignments(terminal, names)?;
    let added = mutation::add_variables(&path, &assignments)?;
    debug!("Added {} variables to `{}`", added, path.display());

    Ok(Message::success("Variable(s) added!"))
}

/// `remove <name> -var <names...>`
///
/// # Errors
///
/// Fails if the file is missing or unreadable, the `-var` group is absent or empty,
/// or the rewrite fails.
pub fn remove<R: BufRead, W: Write>(
    session: &Session,
    terminal: &mut Terminal<R, W>,
    tokens: &[String],
) -> Result<Message> {
    let path = session.env_path(&tokens[1]);
    file_handling::ensure_exists(&path)?;
    let names = variable_names(tokens, Command::Remove)?;

    let plan = RemovalPlan::load(&path, names)?;

    if !terminal.confirm("Are you sure you want to remove these variable(s)? (y/n)")? {
        return Ok(Message::success("Variable(s) not removed!"));
    }

    plan.apply(&path, session.write_mode)?;
    Ok(Message::success("Variable(s) removed!"))
}

/// `update <name> -var <names...> [-p]`
///
/// Variables are handled one after another against a fresh read of the file. A
/// variable missing from the file stops the command; updates made before it stay.
///
/// # Errors
///
/// Fails if the file is missing, the `-var` group is absent or empty, or one of the
/// variables does not occur in the file.
pub fn update<R: BufRead, W: Write>(
    session: &Session,
    terminal: &mut Terminal<R, W>,
    tokens: &[String],
) -> Result<Message> {
    let path = session.env_path(&tokens[1]);
    file_handling::ensure_exists(&path)?;
    let names = variable_names(tokens, Command::Update)?;
    let confirm_each = arguments::has_flag(tokens, PROMPT_EACH_FLAG);

    let mut updated = 0;
    for name in names {
        let plan = UpdatePlan::load(&path, name)?;
        let value = terminal.ask(&format!("Insert new value for variable {name}:"))?;

        if confirm_each
            && !terminal.confirm(&format!(
                "Are you sure you want to change the value of variable {name} to {value}? (y/n)"
            ))?
        {
            terminal.say(Tone::Error, "Variable not updated!")?;
            continue;
        }

        match plan.apply(&path, &value, session.write_mode) {
            Ok(_) => {
                updated += 1;
                terminal.say(Tone::Success, &format!("{name} successfully updated!"))?;
            }
            Err(e) => {
                terminal.say(
                    Tone::Error,
                    &format!("Error when updating variable {name}! {e}"),
                )?;
            }
        }
    }

    Ok(Message::info(format!(
        "{updated} of {} variable(s) updated.",
        names.len()
    )))
}
