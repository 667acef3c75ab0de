//! Built-in command registration.

use crate::CommandRegistry;
use crate::site_commands::register_site_commands;
use crate::theme_commands::register_theme_commands;

/// Register all built-in commands into the registry.
///
/// `help` needs no registration; the registry answers it directly.
pub fn register_builtins(reg: &mut CommandRegistry) {
    register_site_commands(reg);
    register_theme_commands(reg);
}
