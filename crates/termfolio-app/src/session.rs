//! Interactive read-dispatch-print loop.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use crate::app_state::AppState;
use crate::render::{Palette, print_update};

/// Prompt, read and run lines from `input` until end of input.
///
/// Bytes that are not valid UTF-8 are replaced rather than ending the
/// session; the damaged line is dispatched like any other.
pub fn run_session(
    state: &mut AppState,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        write!(out, "{}", Palette::from_surface(state.theme.surface()).paint(&state.prompt()))?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            log::warn!("Input line was not valid UTF-8; invalid bytes replaced");
        }
        let update = state.run_line(line.trim_end_matches(['\r', '\n']));
        // Theme commands may have changed the colors.
        let palette = Palette::from_surface(state.theme.surface());
        print_update(out, &update, &palette)?;
    }
}
