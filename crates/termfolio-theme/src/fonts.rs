//! The fixed list of selectable font stacks.

/// Font stacks a visitor may choose from. Index 0 is the default.
pub const AVAILABLE_FONTS: &[&str] = &[
    "'SF Mono', Consolas, Monaco, 'Andale Mono', 'Ubuntu Mono', monospace",
    "'Courier New', Courier, monospace",
    "'Lucida Console', Monaco, monospace",
    "'Fira Code', monospace",
    "'Roboto Mono', monospace",
];

/// Whether `font` is exactly one of [`AVAILABLE_FONTS`].
pub fn is_available_font(font: &str) -> bool {
    AVAILABLE_FONTS.contains(&font)
}

/// Display name for a font stack: the first family with quotes removed.
///
/// `"'Courier New', Courier, monospace"` becomes `Courier New`.
pub fn clean_font_name(font: &str) -> String {
    font.split(',')
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| *c != '\'' && *c != '"')
        .collect()
}
