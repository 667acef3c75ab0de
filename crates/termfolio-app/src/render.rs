//! Terminal output: colors from the theme surface, screen clearing, and the
//! typed-out welcome banner.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use colored::{ColoredString, Colorize};

use termfolio_effects::{Typewriter, TypewriterEvent, TypewriterParams};
use termfolio_theme::StyleSurface;
use termfolio_types::color::{Rgb, hex_to_rgb};

use crate::commands::Update;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Colors resolved from the style surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgb,
    pub background: Rgb,
    pub error: Rgb,
}

impl Palette {
    pub fn from_surface(surface: &dyn StyleSurface) -> Self {
        let color = |name: &str, fallback: Rgb| {
            surface
                .property(name)
                .and_then(hex_to_rgb)
                .unwrap_or(fallback)
        };
        Self {
            primary: color("--primary-color", Rgb::new(0, 255, 0)),
            background: color("--secondary-color", Rgb::new(0, 0, 0)),
            error: color("--error-color", Rgb::new(255, 0, 0)),
        }
    }

    pub fn paint(&self, line: &str) -> ColoredString {
        let c = if line.starts_with("Error:") {
            self.error
        } else {
            self.primary
        };
        let bg = self.background;
        line.truecolor(c.r, c.g, c.b).on_truecolor(bg.r, bg.g, bg.b)
    }
}

/// Print an update, clearing the screen first when asked to.
pub fn print_update(out: &mut dyn Write, update: &Update, palette: &Palette) -> io::Result<()> {
    if update.cleared {
        write!(out, "{CLEAR_SCREEN}")?;
    }
    for line in &update.lines {
        writeln!(out, "{}", palette.paint(line))?;
    }
    out.flush()
}

/// Type out `text` one character per `speed_ms`. Without animation the
/// whole banner is printed at once.
pub fn play_banner(
    out: &mut dyn Write,
    text: &str,
    speed_ms: u32,
    animate: bool,
    palette: &Palette,
) -> io::Result<()> {
    if !animate {
        return writeln!(out, "{}", palette.paint(text));
    }

    let mut tw = Typewriter::new(TypewriterParams::new(text).with_speed(speed_ms));
    let step = speed_ms.max(1);
    let mut shown = 0;
    loop {
        thread::sleep(Duration::from_millis(u64::from(step)));
        let event = tw.tick(step);
        let revealed = &tw.text()[shown..];
        if !revealed.is_empty() {
            write!(out, "{}", palette.paint(revealed))?;
            out.flush()?;
            shown = tw.text().len();
        }
        if event == Some(TypewriterEvent::Complete) || !tw.is_running() {
            break;
        }
    }
    writeln!(out)
}
