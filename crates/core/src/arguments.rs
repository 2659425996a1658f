//! Segmentation of a token list into flagged argument groups.
//!
//! A command line such as `update db -var HOST PORT -p` is split on whitespace and
//! then queried per flag: the `-var` group is `HOST PORT`, the `-p` group is empty.
//! A group starts right after its flag token and ends before the next token carrying
//! the [`FLAG_MARKER`] prefix, or at the end of the line.

use std::ops::Range;

use log::debug;

/// Prefix that turns a token into a flag.
pub const FLAG_MARKER: char = '-';

/// Flag introducing a list of variable names.
pub const VARIABLES_FLAG: &str = "-var";
/// `create`: skip the "add variables?" prompt.
pub const SKIP_PROMPT_FLAG: &str = "-s";
/// `delete`: skip the confirmation.
pub const SKIP_VALIDATION_FLAG: &str = "-v";
/// `update`: confirm every variable separately.
pub const PROMPT_EACH_FLAG: &str = "-p";

/// The contiguous run of tokens that belongs to one flag.
///
/// `start` and `end` form a half-open range over the token list. A flag that is
/// directly followed by another flag, or that closes the line, yields an empty group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentGroup {
    pub flag: String,
    pub start: usize,
    pub end: usize,
}

impl ArgumentGroup {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end.max(self.start)
    }

    /// Borrows the group's tokens out of the list it was located in.
    #[must_use]
    pub fn tokens<'a>(&self, tokens: &'a [String]) -> &'a [String] {
        let range = self.range();
        let end = range.end.min(tokens.len());
        let start = range.start.min(end);
        &tokens[start..end]
    }
}

/// Returns true for tokens that introduce an argument group.
#[must_use]
pub fn is_flag(token: &str) -> bool {
    token.starts_with(FLAG_MARKER)
}

/// Finds the argument group introduced by `flag`.
///
/// Returns `None` when the flag does not appear. When the flag repeats before its
/// group is closed by another flag, the group restarts after the later occurrence.
#[must_use]
pub fn locate(tokens: &[String], flag: &str) -> Option<ArgumentGroup> {
    let mut start: Option<usize> = None;

    for (index, token) in tokens.iter().enumerate() {
        if token == flag {
            start = Some(index + 1);
        }

        let Some(group_start) = start else {
            continue;
        };

        let closes_group = is_flag(token) && token != flag;
        let is_last = index + 1 == tokens.len();

        if closes_group || is_last {
            let end = if is_flag(token) { index } else { index + 1 };
            let group = ArgumentGroup {
                flag: flag.to_string(),
                start: group_start,
                end: end.max(group_start),
            };
            debug!("Located group {:?} in {:?}", group, tokens);
            return Some(group);
        }
    }

    None
}

/// Whether `flag` appears anywhere in the token list.
#[must_use]
pub fn has_flag(tokens: &[String], flag: &str) -> bool {
    locate(tokens, flag).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<String> {
        line.split_whitespace().map(ToString::to_string).collect()
    }

    #[test]
    fn test_locate_group_until_end() {
        let tokens = tokens("add db -var HOST PORT USER");
        let group = locate(&tokens, VARIABLES_FLAG).unwrap();

        assert_eq!(group.start, 3);
        assert_eq!(group.end, 6);
        assert_eq!(group.len(), 3);
        assert_eq!(group.tokens(&tokens), ["HOST", "PORT", "USER"]);
    }

    #[test]
    fn test_locate_group_until_next_flag() {
        let tokens = tokens("update db -var HOST PORT -p");
        let group = locate(&tokens, VARIABLES_FLAG).unwrap();

        assert_eq!(group.tokens(&tokens), ["HOST", "PORT"]);
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_locate_missing_flag() {
        let tokens = tokens("add db HOST");
        assert!(locate(&tokens, VARIABLES_FLAG).is_none());
        assert!(!has_flag(&tokens, VARIABLES_FLAG));
    }

    #[test]
    fn test_flag_at_end_is_empty() {
        let tokens = tokens("update db -var HOST -p");
        let group = locate(&tokens, PROMPT_EACH_FLAG).unwrap();

        assert!(group.is_empty());
        assert_eq!(group.len(), 0);
        assert!(group.tokens(&tokens).is_empty());
    }

    #[test]
    fn test_flag_followed_by_flag_is_empty() {
        let tokens = tokens("create db -var -s");
        let group = locate(&tokens, VARIABLES_FLAG).unwrap();

        assert!(group.is_empty());
        assert!(group.tokens(&tokens).is_empty());
        assert!(has_flag(&tokens, SKIP_PROMPT_FLAG));
    }

    #[test]
    fn test_flag_alone_is_empty() {
        let tokens = tokens("-v");
        let group = locate(&tokens, SKIP_VALIDATION_FLAG).unwrap();
        assert!(group.is_empty());
    }

    #[test]
    fn test_repeated_flag_restarts_group() {
        let tokens = tokens("remove db -var HOST -var PORT");
        let group = locate(&tokens, VARIABLES_FLAG).unwrap();

        assert_eq!(group.tokens(&tokens), ["PORT"]);
    }

    #[test]
    fn test_group_closed_before_repeat_is_kept() {
        let tokens = tokens("remove db -var HOST -p -var PORT");
        let group = locate(&tokens, VARIABLES_FLAG).unwrap();

        assert_eq!(group.tokens(&tokens), ["HOST"]);
    }

    #[test]
    fn test_is_flag() {
        assert!(is_flag("-var"));
        assert!(is_flag("-"));
        assert!(!is_flag("var"));
        assert!(!is_flag(""));
    }

    #[test]
    fn test_group_length_matches_argument_count() {
        for count in 1..6 {
            let mut tokens = tokens("add db -var");
            tokens.extend((0..count).map(|i| format!("NAME_{i}")));
            tokens.push("-p".to_string());

            let group = locate(&tokens, VARIABLES_FLAG).unwrap();
            assert_eq!(group.len(), count);
        }
    }
}
