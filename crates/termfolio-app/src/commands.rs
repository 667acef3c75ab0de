use termfolio_terminal::CommandOutput;

/// What the display has to do after a line was run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Update {
    /// Scrollback was wiped; the screen must be cleared first.
    pub cleared: bool,
    /// New lines to print.
    pub lines: Vec<String>,
}

/// Apply a command result to the scrollback and describe the change.
pub fn process_command_output(output: CommandOutput, scrollback: &mut Vec<String>) -> Update {
    let mut update = Update::default();
    match output {
        CommandOutput::Text(text) => {
            update.lines.extend(text.lines().map(str::to_string));
        },
        CommandOutput::Lines(lines) => update.lines = lines,
        CommandOutput::Clear => {
            scrollback.clear();
            update.cleared = true;
        },
        CommandOutput::None => {},
    }
    scrollback.extend(update.lines.iter().cloned());
    update
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_split_into_lines() {
        let mut sb = Vec::new();
        let u = process_command_output(CommandOutput::Text("a\nb".into()), &mut sb);
        assert_eq!(u.lines, vec!["a", "b"]);
        assert_eq!(sb, vec!["a", "b"]);
    }

    #[test]
    fn lines_keep_blank_entries() {
        let mut sb = vec!["old".to_string()];
        let u = process_command_output(CommandOutput::lines(["x", "", "y"]), &mut sb);
        assert_eq!(u.lines, vec!["x", "", "y"]);
        assert_eq!(sb.len(), 4);
    }

    #[test]
    fn clear_and_none() {
        let mut sb = vec!["old".to_string()];
        let u = process_command_output(CommandOutput::None, &mut sb);
        assert_eq!(u, Update::default());
        assert_eq!(sb.len(), 1);

        let u = process_command_output(CommandOutput::Clear, &mut sb);
        assert!(u.cleared);
        assert!(sb.is_empty());
    }
}
