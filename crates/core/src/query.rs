use log::debug;

use crate::error::{Error, Result};

/// Finds every line containing `reference`, ignoring case.
///
/// The reference and each line are compared upper-cased; the returned lines keep
/// their original text and file order.
///
/// # Errors
///
/// Returns [`Error::VariableNotFound`] if no line matches.
pub fn query(reference: &str, content: &str) -> Result<Vec<String>> {
    let reference = reference.to_uppercase();

    let matches: Vec<String> = content
        .split('\n')
        .filter(|line| line.to_uppercase().contains(&reference))
        .map(ToString::to_string)
        .collect();

    debug!("Query `{}` matched {} lines", reference, matches.len());

    if matches.is_empty() {
        return Err(Error::VariableNotFound(reference));
    }

    Ok(matches)
}

/// Renders query matches one per line, each prefixed with `-`.
#[must_use]
pub fn format_matches(matches: &[String]) -> String {
    matches
        .iter()
        .map(|line| format!("-{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
