//! Command interpreter for the terminal site.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. The registry parses input
//! lines, resolves the command name, and dispatches `execute()`. Failures
//! never escape the registry: they come back as displayable text.

mod commands;
pub mod completion;
mod interpreter;
pub mod paths;
pub mod services;
pub mod site_commands;
#[cfg(test)]
mod test_utils;
pub mod theme_commands;

/// Register every built-in command (site navigation and theme) into a registry.
pub use commands::register_builtins;
/// Command-name and path completion for the input line.
pub use completion::{available_commands, complete, path_completions};
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (text, lines, clear signal).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Services and current location passed to every command.
pub use interpreter::Environment;
/// Navigation and clock services injected into commands.
pub use services::{Clock, Navigator, SystemClock};
