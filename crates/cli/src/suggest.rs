use envelope_core::arguments::FLAG_MARKER;
use envelope_core::command::Command;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// The command whose spelling best fuzzy-matches `typed`, if any does.
///
/// A command matches when the typed name is a fuzzy subsequence of one of its
/// aliases, or when a multi-letter alias is a fuzzy subsequence of the typed name.
#[must_use]
pub fn closest_command(typed: &str) -> Option<Command> {
    let typed = typed.strip_prefix(FLAG_MARKER).unwrap_or(typed);
    if typed.is_empty() {
        return None;
    }

    let matcher = SkimMatcherV2::default();

    Command::ALL
        .into_iter()
        .flat_map(|command| command.aliases().iter().map(move |alias| (command, *alias)))
        .filter_map(|(command, alias)| {
            let forward = matcher.fuzzy_match(alias, typed);
            let backward = if alias.len() > 1 {
                matcher.fuzzy_match(typed, alias)
            } else {
                None
            };

            forward.max(backward).map(|score| (command, score))
        })
        .max_by_key(|(_, score)| *score)
        .map(|(command, _)| command)
}
