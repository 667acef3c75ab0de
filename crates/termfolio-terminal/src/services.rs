//! Services the commands reach outside the interpreter for.

use chrono::{DateTime, FixedOffset, Local};

use termfolio_types::error::Result;

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

/// Client-side page navigation.
///
/// `goto` blocks until the navigation settles. There is no timeout: a
/// navigation that never settles stalls the command that requested it.
pub trait Navigator {
    fn goto(&mut self, path: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// Wall-clock source for the `date` command.
pub trait Clock {
    /// Current local time, including the host's UTC offset.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The host's local clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}
