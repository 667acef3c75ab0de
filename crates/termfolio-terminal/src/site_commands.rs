//! Terminal commands for moving around the site: clear, date, ls, cd, cat.

use termfolio_types::error::Result;

use crate::paths::{self, ROOT_PATH};
use crate::{Command, CommandOutput, CommandRegistry, Environment};

/// Register site navigation commands.
pub fn register_site_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(CdCmd));
    reg.register(Box::new(CatCmd));
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;

impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clears the terminal screen."
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

struct DateCmd;

impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Displays the current date and time."
    }
    fn usage(&self) -> &str {
        "date"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let now = env.clock.now();
        Ok(CommandOutput::Text(
            now.format("%a %b %d %Y %H:%M:%S GMT%z").to_string(),
        ))
    }
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

struct LsCmd;

impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "Lists directory contents (available pages)."
    }
    fn usage(&self) -> &str {
        "ls"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        // Listing always shows the root, wherever the visitor is.
        let contents = paths::children(ROOT_PATH);
        if contents.is_empty() {
            return Ok(CommandOutput::Text(format!(
                "ls: cannot access '{ROOT_PATH}': No such file or directory"
            )));
        }
        Ok(CommandOutput::lines(contents.iter().copied()))
    }
}

// ---------------------------------------------------------------------------
// cd
// ---------------------------------------------------------------------------

struct CdCmd;

impl Command for CdCmd {
    fn name(&self) -> &str {
        "cd"
    }
    fn description(&self) -> &str {
        "Changes the directory (navigates to a page). Usage: cd <page>"
    }
    fn usage(&self) -> &str {
        "cd <page>"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let Some(&target) = args.first() else {
            return Ok(CommandOutput::Text("usage: cd <directory>".to_string()));
        };
        let Some(path) = paths::resolve_target(target) else {
            return Ok(CommandOutput::Text(format!(
                "cd: no such file or directory: {target}"
            )));
        };
        if path != env.current_path {
            log::debug!("cd: navigating {} -> {path}", env.current_path);
            env.navigator.goto(&path)?;
        }
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// cat
// ---------------------------------------------------------------------------

struct CatCmd;

/// Placeholder text for a page. The pages themselves are rendered elsewhere.
fn page_summary(page: &str) -> Vec<String> {
    let lines: &[&str] = match page {
        "about" => &[
            "# About Me",
            "Placeholder content for the about page.",
            "Skills: Rust, TypeScript, Linux...",
        ],
        "projects" => &[
            "# Projects",
            "Project 1: Terminal Website",
            "Project 2: ...",
        ],
        "blog" => &["# Blog", "List of posts will go here..."],
        "contact" => &[
            "# Contact",
            "Use the form on /contact or email directly at placeholder@example.com",
        ],
        other => return vec![format!("Simulated content for page: {other}")],
    };
    lines.iter().map(|l| l.to_string()).collect()
}

impl Command for CatCmd {
    fn name(&self) -> &str {
        "cat"
    }
    fn description(&self) -> &str {
        "Displays the content of a page/file. Usage: cat <page>"
    }
    fn usage(&self) -> &str {
        "cat <page>"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let Some(&target) = args.first() else {
            return Ok(CommandOutput::Text("usage: cat <page_name>".to_string()));
        };
        if paths::is_root_child(target) {
            return Ok(CommandOutput::Lines(page_summary(target)));
        }
        if matches!(target, "." | "/" | "~") && env.current_path == ROOT_PATH {
            return Ok(CommandOutput::lines([
                "# Home (/)",
                "This is the main terminal interface.",
                "Type 'help' for commands.",
            ]));
        }
        Ok(CommandOutput::Text(format!(
            "cat: {target}: No such file or directory"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestRig;

    fn registry() -> CommandRegistry {
        let mut reg = CommandRegistry::new();
        register_site_commands(&mut reg);
        reg
    }

    #[test]
    fn clear_ignores_arguments() {
        let reg = registry();
        let mut rig = TestRig::new();
        assert_eq!(reg.execute("clear", &mut rig.env("/")), CommandOutput::Clear);
        assert_eq!(
            reg.execute("clear --all now", &mut rig.env("/about")),
            CommandOutput::Clear
        );
    }

    #[test]
    fn date_uses_injected_clock() {
        let reg = registry();
        let mut rig = TestRig::new();
        assert_eq!(
            reg.execute("date", &mut rig.env("/")),
            CommandOutput::Text("Sat Oct 17 2026 14:03:09 GMT+0200".into())
        );
    }

    #[test]
    fn ls_lists_root_from_anywhere() {
        let reg = registry();
        let mut rig = TestRig::new();
        let expected = CommandOutput::lines(["about", "projects", "blog", "contact"]);
        assert_eq!(reg.execute("ls", &mut rig.env("/")), expected);
        assert_eq!(reg.execute("ls blog", &mut rig.env("/blog")), expected);
    }

    #[test]
    fn cd_to_child_navigates_once() {
        let reg = registry();
        let mut rig = TestRig::new();
        let out = reg.execute("cd about", &mut rig.env("/"));
        assert_eq!(out, CommandOutput::None);
        assert_eq!(rig.navigator.visits, vec!["/about"]);
    }

    #[test]
    fn cd_unknown_target() {
        let reg = registry();
        let mut rig = TestRig::new();
        let out = reg.execute("cd nosuchpage", &mut rig.env("/"));
        assert_eq!(
            out,
            CommandOutput::Text("cd: no such file or directory: nosuchpage".into())
        );
        assert!(rig.navigator.visits.is_empty());
    }

    #[test]
    fn cd_home_aliases_from_subpage() {
        let reg = registry();
        for target in ["/", "~", ".."] {
            let mut rig = TestRig::new();
            let out = reg.execute(&format!("cd {target}"), &mut rig.env("/projects"));
            assert_eq!(out, CommandOutput::None);
            assert_eq!(rig.navigator.visits, vec!["/"]);
        }
    }

    #[test]
    fn cd_to_current_location_does_not_navigate() {
        let reg = registry();
        let mut rig = TestRig::new();
        assert_eq!(reg.execute("cd ~", &mut rig.env("/")), CommandOutput::None);
        assert_eq!(reg.execute("cd blog", &mut rig.env("/blog")), CommandOutput::None);
        assert!(rig.navigator.visits.is_empty());
    }

    #[test]
    fn cd_without_target_prints_usage() {
        let reg = registry();
        let mut rig = TestRig::new();
        assert_eq!(
            reg.execute("cd", &mut rig.env("/")),
            CommandOutput::Text("usage: cd <directory>".into())
        );
    }

    #[test]
    fn cd_navigation_failure_is_wrapped() {
        let reg = registry();
        let mut rig = TestRig::new();
        rig.navigator.fail_with = Some("route aborted".into());
        let out = reg.execute("cd contact", &mut rig.env("/"));
        let CommandOutput::Text(text) = out else {
            panic!("expected text");
        };
        assert!(text.starts_with("Error: "));
        assert!(text.contains("route aborted"));
    }

    #[test]
    fn cat_page_placeholder() {
        let reg = registry();
        let mut rig = TestRig::new();
        let CommandOutput::Lines(lines) = reg.execute("cat projects", &mut rig.env("/about")) else {
            panic!("expected lines");
        };
        assert_eq!(lines[0], "# Projects");
    }

    #[test]
    fn cat_home_only_at_root() {
        let reg = registry();
        let mut rig = TestRig::new();
        for target in [".", "/", "~"] {
            let CommandOutput::Lines(lines) =
                reg.execute(&format!("cat {target}"), &mut rig.env("/"))
            else {
                panic!("expected lines");
            };
            assert_eq!(lines[0], "# Home (/)");
        }
        assert_eq!(
            reg.execute("cat .", &mut rig.env("/about")),
            CommandOutput::Text("cat: .: No such file or directory".into())
        );
    }

    #[test]
    fn cat_missing_and_unknown() {
        let reg = registry();
        let mut rig = TestRig::new();
        assert_eq!(
            reg.execute("cat", &mut rig.env("/")),
            CommandOutput::Text("usage: cat <page_name>".into())
        );
        assert_eq!(
            reg.execute("cat passwd", &mut rig.env("/")),
            CommandOutput::Text("cat: passwd: No such file or directory".into())
        );
    }
}
