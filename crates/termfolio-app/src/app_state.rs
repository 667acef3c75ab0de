use termfolio_terminal::{CommandRegistry, Environment, SystemClock, complete, register_builtins};
use termfolio_theme::{MemoryStyleSurface, SettingsStorage, ThemeStore};
use termfolio_types::config::SiteConfig;

use crate::commands::{Update, process_command_output};
use crate::navigator::SiteNavigator;

/// Marker the front end uses to request completion instead of execution.
pub const COMPLETE_SUFFIX: char = '\t';

/// All mutable state of a terminal session.
pub struct AppState {
    pub config: SiteConfig,
    pub theme: ThemeStore,
    pub cmd_reg: CommandRegistry,
    pub navigator: SiteNavigator,
    pub clock: SystemClock,
    pub output_lines: Vec<String>,
}

impl AppState {
    pub fn new(config: SiteConfig, storage: Box<dyn SettingsStorage>) -> Self {
        let mut theme = ThemeStore::load(storage, Box::new(MemoryStyleSurface::new()));
        theme.subscribe(|s| {
            log::info!(
                "Theme changed: primary={} secondary={} font={}",
                s.primary_color,
                s.secondary_color,
                s.font_family
            );
        });

        let mut cmd_reg = CommandRegistry::new();
        register_builtins(&mut cmd_reg);

        let navigator = SiteNavigator::new(&config.blog_dir, config.contact_addr.clone());

        Self {
            config,
            theme,
            cmd_reg,
            navigator,
            clock: SystemClock,
            output_lines: Vec::new(),
        }
    }

    pub fn cwd(&self) -> &str {
        self.navigator.current_path()
    }

    pub fn prompt(&self) -> String {
        format!(
            "{}@{}:{}$ ",
            self.config.prompt_user,
            self.config.hostname,
            self.cwd()
        )
    }

    /// Run one input line and return what the display must show.
    ///
    /// A line ending in [`COMPLETE_SUFFIX`] lists completions instead of
    /// executing anything.
    pub fn run_line(&mut self, line: &str) -> Update {
        if let Some(partial) = line.strip_suffix(COMPLETE_SUFFIX) {
            let matches = complete(&self.cmd_reg, self.cwd(), partial);
            let mut update = Update::default();
            if !matches.is_empty() {
                update.lines.push(matches.join("  "));
            }
            self.output_lines.extend(update.lines.iter().cloned());
            return update;
        }

        let echo = format!("{}{}", self.prompt(), line.trim());
        let output = {
            let mut env = Environment {
                current_path: self.navigator.current_path().to_string(),
                theme: &mut self.theme,
                navigator: &mut self.navigator,
                clock: &self.clock,
            };
            self.cmd_reg.execute(line, &mut env)
        };

        self.output_lines.push(echo);
        let mut update = process_command_output(output, &mut self.output_lines);
        if let Some(page) = self.navigator.take_rendered() {
            self.output_lines.extend(page.iter().cloned());
            update.lines.extend(page);
        }
        update
    }
}
