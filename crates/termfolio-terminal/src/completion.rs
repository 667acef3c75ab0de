//! Tab completion for the input line.

use crate::CommandRegistry;
use crate::paths::{self, ROOT_PATH};

/// Commands whose first argument is a site path.
const PATH_COMMANDS: &[&str] = &["cd", "cat"];

/// Every command name, sorted.
pub fn available_commands(reg: &CommandRegistry) -> Vec<String> {
    reg.list_commands()
        .into_iter()
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Path names offered for completion.
///
/// Only the root has children, so the current path does not change the
/// answer yet.
pub fn path_completions(_current_path: &str) -> Vec<String> {
    paths::children(ROOT_PATH)
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Candidates for the word being typed at the end of `line`.
///
/// The first word completes against command names; the argument of `cd` or
/// `cat` completes against path names. Anything else has no candidates.
pub fn complete(reg: &CommandRegistry, current_path: &str, line: &str) -> Vec<String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let ends_with_space = line.ends_with(char::is_whitespace);

    match (words.as_slice(), ends_with_space) {
        ([], _) => available_commands(reg),
        ([partial], false) => available_commands(reg)
            .into_iter()
            .filter(|name| name.starts_with(partial))
            .collect(),
        ([cmd], true) if PATH_COMMANDS.contains(cmd) => path_completions(current_path),
        ([cmd, partial], false) if PATH_COMMANDS.contains(cmd) => path_completions(current_path)
            .into_iter()
            .filter(|p| p.starts_with(partial))
            .collect(),
        _ => Vec::new(),
    }
}
