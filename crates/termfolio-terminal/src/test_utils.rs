//! Shared fakes for command tests.

use chrono::{DateTime, FixedOffset, TimeZone};

use termfolio_theme::{MemoryStorage, MemoryStyleSurface, ThemeStore};
use termfolio_types::error::{Result, TermfolioError};

use crate::interpreter::Environment;
use crate::services::{Clock, Navigator};

/// Records every navigation request. Optionally fails them.
#[derive(Debug, Default)]
pub struct FakeNavigator {
    pub visits: Vec<String>,
    pub fail_with: Option<String>,
}

impl Navigator for FakeNavigator {
    fn goto(&mut self, path: &str) -> Result<()> {
        self.visits.push(path.to_string());
        match &self.fail_with {
            Some(msg) => Err(TermfolioError::Navigation(msg.clone())),
            None => Ok(()),
        }
    }
}

/// A clock stuck at one instant.
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Owns everything an `Environment` borrows.
pub struct TestRig {
    pub theme: ThemeStore,
    pub navigator: FakeNavigator,
    pub clock: FixedClock,
}

impl TestRig {
    pub fn new() -> Self {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        Self {
            theme: ThemeStore::load(
                Box::new(MemoryStorage::new()),
                Box::new(MemoryStyleSurface::new()),
            ),
            navigator: FakeNavigator::default(),
            clock: FixedClock(offset.with_ymd_and_hms(2026, 10, 17, 14, 3, 9).unwrap()),
        }
    }

    pub fn env(&mut self, path: &str) -> Environment<'_> {
        Environment {
            current_path: path.to_string(),
            theme: &mut self.theme,
            navigator: &mut self.navigator,
            clock: &self.clock,
        }
    }
}
