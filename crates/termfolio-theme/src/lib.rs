//! Theme settings -- display preferences for the terminal.
//!
//! The store holds the primary color, secondary color, and font family. It
//! persists the record through a [`SettingsStorage`] backend and reflects it
//! into a [`StyleSurface`] as named style variables on every change.

pub mod fonts;
pub mod storage;
pub mod store;
pub mod surface;

pub use fonts::{AVAILABLE_FONTS, clean_font_name, is_available_font};
pub use storage::{FileStorage, MemoryStorage, SettingsStorage};
pub use store::{STORAGE_KEY, SubscriptionId, ThemeSettings, ThemeStore};
pub use surface::{MemoryStyleSurface, StyleSurface};
