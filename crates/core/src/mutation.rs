//! Variable mutations: add, remove and update.
//!
//! These functions take already-resolved names and values. Asking the user for
//! values or confirmations is left to the caller.

use std::fmt::{Display, Formatter};
use std::path::Path;

use indexmap::IndexSet;
use log::{debug, warn};

use crate::error::{Error, Result};
use crate::file_handling::{self, WriteMode};

/// Lines this short are never removed.
const MIN_REMOVABLE_LINE_LENGTH: usize = 3;

/// A variable name paired with the value to store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub value: String,
}

impl Assignment {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Display for Assignment {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}={}", self.name, self.value)
    }
}

/// Appends each assignment in order.
///
/// Stops at the first failed write; assignments appended before it stay in the file.
///
/// # Errors
///
/// Returns the [`Error::Io`] of the first failed append.
pub fn add_variables(path: &Path, assignments: &[Assignment]) -> Result<usize> {
    append_each(assignments, |assignment| {
        file_handling::append_variable(path, &assignment.name, &assignment.value)
    })
}

fn append_each<F>(assignments: &[Assignment], mut append: F) -> Result<usize>
where
    F: FnMut(&Assignment) -> Result<()>,
{
    for assignment in assignments {
        append(assignment)?;
    }

    Ok(assignments.len())
}

/// The outcome of matching variable names against an env file's lines, computed
/// before anything is written.
#[derive(Debug, Clone)]
pub struct RemovalPlan {
    names: IndexSet<String>,
    kept: Vec<String>,
    removed: Vec<String>,
}

impl RemovalPlan {
    /// Splits `lines` into the ones to keep and the ones containing any of `names`.
    ///
    /// Matching is a case-sensitive substring search on the raw line. A line matching
    /// several names is removed once.
    #[must_use]
    pub fn new(lines: Vec<String>, names: &[String]) -> Self {
        let names: IndexSet<String> = names.iter().cloned().collect();
        let (removed, kept): (Vec<String>, Vec<String>) = lines.into_iter().partition(|line| {
            line.len() >= MIN_REMOVABLE_LINE_LENGTH
                && names.iter().any(|name| line.contains(name.as_str()))
        });

        debug!(
            "Removal of {:?}: {} lines removed, {} kept",
            names,
            removed.len(),
            kept.len()
        );

        Self {
            names,
            kept,
            removed,
        }
    }

    /// Loads the file fresh from disk and plans the removal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileNotFound`] if the file cannot be read.
    pub fn load(path: &Path, names: &[String]) -> Result<Self> {
        let lines = file_handling::load_lines(path)?;
        Ok(Self::new(lines, names))
    }

    #[must_use]
    pub fn removed(&self) -> &[String] {
        &self.removed
    }

    #[must_use]
    pub fn kept(&self) -> &[String] {
        &self.kept
    }

    /// Requested names that no line contains.
    #[must_use]
    pub fn unmatched_names(&self) -> Vec<&str> {
        self.names
            .iter()
            .filter(|name| !self.removed.iter().any(|line| line.contains(name.as_str())))
            .map(String::as_str)
            .collect()
    }

    /// Writes the kept lines back to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the rewrite fails.
    pub fn apply(&self, path: &Path, mode: WriteMode) -> Result<()> {
        let unmatched = self.unmatched_names();
        if !unmatched.is_empty() {
            warn!("No lines matched {:?}", unmatched);
        }

        file_handling::rewrite(path, &self.kept, mode)
    }
}

/// Whether the raw content holds the literal `name=` anywhere.
#[must_use]
pub fn has_variable(content: &str, name: &str) -> bool {
    content.contains(&format!("{name}="))
}

fn key_of(line: &str) -> &str {
    line.split_once('=').map_or(line, |(key, _)| key)
}

/// Replaces every line whose key (text before the first `=`) equals `name`.
///
/// Returns the new lines and how many were replaced. Other lines are untouched.
#[must_use]
pub fn update_lines(lines: &[String], name: &str, value: &str) -> (Vec<String>, usize) {
    let mut replaced = 0;
    let updated = lines
        .iter()
        .map(|line| {
            if key_of(line) == name {
                replaced += 1;
                format!("{name}={value}")
            } else {
                line.clone()
            }
        })
        .collect();

    (updated, replaced)
}

/// A single variable update, checked against the content it will rewrite.
#[derive(Debug, Clone)]
pub struct UpdatePlan {
    name: String,
    lines: Vec<String>,
}

impl UpdatePlan {
    /// Loads the file fresh from disk and checks that `name=` occurs in it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileNotFound`] if the file cannot be read, or
    /// [`Error::VariableNotFound`] if `name=` does not occur in it.
    pub fn load(path: &Path, name: &str) -> Result<Self> {
        let content = file_handling::read_content(path)?;
        if !has_variable(&content, name) {
            return Err(Error::VariableNotFound(name.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            lines: content.split('\n').map(ToString::to_string).collect(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Writes the loaded lines back with `value` on every line keyed by the name.
    ///
    /// Returns how many lines were replaced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the rewrite fails.
    pub fn apply(&self, path: &Path, value: &str, mode: WriteMode) -> Result<usize> {
        let (updated, replaced) = update_lines(&self.lines, &self.name, value);
        debug!("Updating `{}`: {} lines replaced", self.name, replaced);

        file_handling::rewrite(path, &updated, mode)?;
        Ok(replaced)
    }
}

/// Reloads the file and sets `name` to `value` on every line keyed by `name`.
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] if the file cannot be read,
/// [`Error::VariableNotFound`] if `name=` does not occur in it, or [`Error::Io`] if
/// the rewrite fails.
pub fn update_variable(path: &Path, name: &str, value: &str, mode: WriteMode) -> Result<usize> {
    UpdatePlan::load(path, name)?.apply(path, value, mode)
}
