//! Terminal commands for theme customization.

use termfolio_theme::{AVAILABLE_FONTS, clean_font_name};
use termfolio_types::error::Result;

use crate::{Command, CommandOutput, CommandRegistry, Environment};

/// Register font and color commands.
pub fn register_theme_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(ListFontsCmd));
    reg.register(Box::new(SetFontCmd));
    reg.register(Box::new(SetThemeCmd));
    reg.register(Box::new(ResetThemeCmd));
}

struct ListFontsCmd;

impl Command for ListFontsCmd {
    fn name(&self) -> &str {
        "list-fonts"
    }
    fn description(&self) -> &str {
        "Lists available fonts."
    }
    fn usage(&self) -> &str {
        "list-fonts"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut out = vec!["Available fonts:".to_string()];
        out.extend(
            AVAILABLE_FONTS
                .iter()
                .enumerate()
                .map(|(i, f)| format!("  [{i}] {}", clean_font_name(f))),
        );
        Ok(CommandOutput::Lines(out))
    }
}

struct SetFontCmd;

/// Pick a font by index, falling back to a case-insensitive substring match
/// on the display names. The first match wins.
fn find_font(input: &str) -> Option<&'static str> {
    if let Ok(index) = input.parse::<usize>()
        && let Some(font) = AVAILABLE_FONTS.get(index)
    {
        return Some(*font);
    }
    let needle = input.to_lowercase();
    AVAILABLE_FONTS
        .iter()
        .find(|f| clean_font_name(f).to_lowercase().contains(&needle))
        .copied()
}

impl Command for SetFontCmd {
    fn name(&self) -> &str {
        "set-font"
    }
    fn description(&self) -> &str {
        "Sets the font. Usage: set-font <index|name>"
    }
    fn usage(&self) -> &str {
        "set-font <index|name>"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let input = args.join(" ");
        let input = input.trim();
        if input.is_empty() {
            return Ok(CommandOutput::Text(
                "Usage: set-font <index_number | partial_name>".to_string(),
            ));
        }

        let Some(font) = find_font(input) else {
            return Ok(CommandOutput::Text(format!(
                "Font not found: {input}. Use 'list-fonts' to see options."
            )));
        };

        let text = if env.theme.set_font(font) {
            format!("Font set to {}.", clean_font_name(font))
        } else {
            "Error setting font.".to_string()
        };
        Ok(CommandOutput::Text(text))
    }
}

struct SetThemeCmd;

impl Command for SetThemeCmd {
    fn name(&self) -> &str {
        "set-theme"
    }
    fn description(&self) -> &str {
        "Sets primary (text) and background colors. Usage: set-theme <#hex1> <#hex2>"
    }
    fn usage(&self) -> &str {
        "set-theme <#hex1> <#hex2>"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let (Some(&primary), Some(&secondary)) = (args.first(), args.get(1)) else {
            return Ok(CommandOutput::Text(
                "Usage: set-theme <#primaryHex> <#secondaryHex>".to_string(),
            ));
        };

        let text = if env.theme.set_colors(primary, secondary) {
            format!("Theme colors set to Primary: {primary}, Secondary: {secondary}.")
        } else {
            "Invalid color format. Use hex codes like #RRGGBB (e.g., #00ff00 #000000).".to_string()
        };
        Ok(CommandOutput::Text(text))
    }
}

struct ResetThemeCmd;

impl Command for ResetThemeCmd {
    fn name(&self) -> &str {
        "reset-theme"
    }
    fn description(&self) -> &str {
        "Resets theme to default colors and font."
    }
    fn usage(&self) -> &str {
        "reset-theme"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        env.theme.reset();
        Ok(CommandOutput::Text("Theme reset to defaults.".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestRig;
    use termfolio_theme::ThemeSettings;

    fn registry() -> CommandRegistry {
        let mut reg = CommandRegistry::new();
        register_theme_commands(&mut reg);
        reg
    }

    #[test]
    fn list_fonts_shows_index_and_clean_name() {
        let reg = registry();
        let mut rig = TestRig::new();
        let CommandOutput::Lines(lines) = reg.execute("list-fonts", &mut rig.env("/")) else {
            panic!("expected lines");
        };
        assert_eq!(lines[0], "Available fonts:");
        assert_eq!(lines[1], "  [0] SF Mono");
        assert_eq!(lines[4], "  [3] Fira Code");
        assert_eq!(lines.len(), AVAILABLE_FONTS.len() + 1);
    }

    #[test]
    fn set_font_by_index() {
        let reg = registry();
        let mut rig = TestRig::new();
        rig.theme.set_font(AVAILABLE_FONTS[2]);
        let out = reg.execute("set-font 0", &mut rig.env("/"));
        assert_eq!(out, CommandOutput::Text("Font set to SF Mono.".into()));
        assert_eq!(rig.theme.get().font_family, AVAILABLE_FONTS[0]);
    }

    #[test]
    fn set_font_by_partial_name_is_case_insensitive() {
        let reg = registry();
        let mut rig = TestRig::new();
        let out = reg.execute("set-font ROBOTO", &mut rig.env("/"));
        assert_eq!(out, CommandOutput::Text("Font set to Roboto Mono.".into()));
        assert_eq!(rig.theme.get().font_family, AVAILABLE_FONTS[4]);
    }

    #[test]
    fn set_font_multi_word_name() {
        let reg = registry();
        let mut rig = TestRig::new();
        let out = reg.execute("set-font courier new", &mut rig.env("/"));
        assert_eq!(out, CommandOutput::Text("Font set to Courier New.".into()));
    }

    #[test]
    fn set_font_first_match_wins() {
        // "mono" appears in "SF Mono" before "Roboto Mono".
        assert_eq!(find_font("mono"), Some(AVAILABLE_FONTS[0]));
    }

    #[test]
    fn set_font_out_of_range_falls_through_to_name() {
        let reg = registry();
        let mut rig = TestRig::new();
        let out = reg.execute("set-font 999", &mut rig.env("/"));
        let CommandOutput::Text(text) = out else {
            panic!("expected text");
        };
        assert!(text.to_lowercase().contains("font not found"));
        assert!(text.contains("999"));
        assert_eq!(rig.theme.get().font_family, AVAILABLE_FONTS[0]);
    }

    #[test]
    fn set_font_without_argument() {
        let reg = registry();
        let mut rig = TestRig::new();
        assert_eq!(
            reg.execute("set-font", &mut rig.env("/")),
            CommandOutput::Text("Usage: set-font <index_number | partial_name>".into())
        );
    }

    #[test]
    fn set_theme_valid_colors() {
        let reg = registry();
        let mut rig = TestRig::new();
        let out = reg.execute("set-theme #123456 #abcdef", &mut rig.env("/"));
        assert_eq!(
            out,
            CommandOutput::Text("Theme colors set to Primary: #123456, Secondary: #abcdef.".into())
        );
        let s = rig.theme.get();
        assert_eq!(s.primary_color, "#123456");
        assert_eq!(s.secondary_color, "#abcdef");
    }

    #[test]
    fn set_theme_invalid_colors_leave_settings_alone() {
        let reg = registry();
        let mut rig = TestRig::new();
        let out = reg.execute("set-theme red blue", &mut rig.env("/"));
        let CommandOutput::Text(text) = out else {
            panic!("expected text");
        };
        assert!(text.starts_with("Invalid color format"));
        assert_eq!(rig.theme.get(), ThemeSettings::default());
    }

    #[test]
    fn set_theme_needs_two_colors() {
        let reg = registry();
        let mut rig = TestRig::new();
        assert_eq!(
            reg.execute("set-theme #123456", &mut rig.env("/")),
            CommandOutput::Text("Usage: set-theme <#primaryHex> <#secondaryHex>".into())
        );
    }

    #[test]
    fn reset_theme_restores_defaults() {
        let reg = registry();
        let mut rig = TestRig::new();
        reg.execute("set-theme #111111 #222222", &mut rig.env("/"));
        reg.execute("set-font 3", &mut rig.env("/"));
        let out = reg.execute("reset-theme", &mut rig.env("/"));
        assert_eq!(out, CommandOutput::Text("Theme reset to defaults.".into()));
        assert_eq!(rig.theme.get(), ThemeSettings::default());
    }
}
