//! Command trait, registry, and dispatch logic.
//!
//! Input is split on whitespace: the first token names the command, the rest
//! are its arguments. There is no quoting, piping, or chaining.

use std::collections::HashMap;

use termfolio_theme::ThemeStore;
use termfolio_types::error::Result;

use crate::services::{Clock, Navigator};

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Command produced no visible output.
    None,
    /// A single block of text.
    Text(String),
    /// One entry per display line.
    Lines(Vec<String>),
    /// Signal to erase all prior output.
    Clear,
}

impl CommandOutput {
    /// Build a `Lines` output from anything string-like.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Lines(lines.into_iter().map(Into::into).collect())
    }

    /// Collapse empty text and empty line lists into `None`.
    fn normalized(self) -> Self {
        match self {
            Self::Text(ref t) if t.is_empty() => Self::None,
            Self::Lines(ref l) if l.is_empty() => Self::None,
            other => other,
        }
    }
}

/// Services and location passed to every command.
pub struct Environment<'a> {
    /// Path of the page currently displayed (e.g. `/` or `/about`).
    pub current_path: String,
    /// Display preferences.
    pub theme: &'a mut ThemeStore,
    /// Client-side navigation.
    pub navigator: &'a mut dyn Navigator,
    /// Wall clock for `date`.
    pub clock: &'a dyn Clock,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "cd <page>").
    fn usage(&self) -> &str;

    /// Execute the command with the given arguments and environment.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput>;
}

const HELP_NAME: &str = "help";
const HELP_DESCRIPTION: &str =
    "Lists commands or shows details for a specific command. Usage: help [command]";
const HELP_USAGE: &str = "help [command]";

const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

/// Registry of available commands with dispatch.
///
/// `help` is answered by the registry itself since it needs to see every
/// other entry.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let name = cmd.name().to_string();
        if name == HELP_NAME {
            log::warn!("Command 'help' is built into the registry; registration ignored");
            return;
        }
        if self.commands.insert(name.clone(), cmd).is_some() {
            log::warn!("Command '{name}' registered twice; keeping the newer one");
        }
    }

    /// Find a registered command by exact name.
    pub fn lookup(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// Whether `name` would dispatch to something.
    pub fn contains(&self, name: &str) -> bool {
        name == HELP_NAME || self.commands.contains_key(name)
    }

    /// Description and usage for `name`, including `help` itself.
    pub fn describe(&self, name: &str) -> Option<(&str, &str)> {
        if name == HELP_NAME {
            return Some((HELP_DESCRIPTION, HELP_USAGE));
        }
        self.lookup(name).map(|c| (c.description(), c.usage()))
    }

    /// All `(name, description)` pairs, sorted by name.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        let mut list: Vec<(&str, &str)> = self
            .commands
            .values()
            .map(|c| (c.name(), c.description()))
            .collect();
        list.push((HELP_NAME, HELP_DESCRIPTION));
        list.sort_by_key(|(name, _)| *name);
        list
    }

    /// Parse and execute a command line.
    ///
    /// Returns no error: unknown commands and command errors are turned into
    /// text the caller can display as-is. A command that panics is not
    /// contained; release builds abort on panic.
    pub fn execute(&self, line: &str, env: &mut Environment<'_>) -> CommandOutput {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return CommandOutput::None;
        };
        let args: Vec<&str> = tokens.collect();

        let result = if name == HELP_NAME {
            self.execute_help(&args)
        } else {
            match self.commands.get(name) {
                Some(cmd) => {
                    log::debug!("Dispatching '{name}' with {} arg(s)", args.len());
                    cmd.execute(&args, env)
                },
                None => return CommandOutput::Text(format!("command not found: {name}")),
            }
        };

        match result {
            Ok(output) => output.normalized(),
            Err(e) => {
                log::error!("Error executing command '{name}': {e}");
                let message = e.to_string();
                let message = if message.is_empty() {
                    UNEXPECTED_ERROR
                } else {
                    message.as_str()
                };
                CommandOutput::Text(format!("Error: {message}"))
            },
        }
    }

    fn execute_help(&self, args: &[&str]) -> Result<CommandOutput> {
        if let Some(&name) = args.first() {
            return Ok(match self.describe(name) {
                Some((description, usage)) => CommandOutput::lines([
                    format!("{name}: {description}"),
                    format!("Usage: {usage}"),
                ]),
                None => CommandOutput::Text(format!("help: command not found: {name}")),
            });
        }

        let mut out = vec!["Available commands:".to_string()];
        for (name, description) in self.list_commands() {
            out.push(format!("  {name:<15} - {description}"));
        }
        out.push(String::new());
        out.push("Type 'help <command>' for more details on a specific command.".to_string());
        Ok(CommandOutput::Lines(out))
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
