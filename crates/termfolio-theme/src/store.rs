//! The theme settings store.
//!
//! One store exists per session. It is constructed by the front end and
//! handed by reference to whatever needs it (the command environment, the
//! renderer); nothing reaches it through global state.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use termfolio_types::color::{hex_to_rgb, is_hex_color};

use crate::fonts::{AVAILABLE_FONTS, is_available_font};
use crate::storage::SettingsStorage;
use crate::surface::StyleSurface;

/// Storage key holding the JSON-encoded settings record.
pub const STORAGE_KEY: &str = "bpterminal-theme";

const DEFAULT_PRIMARY: &str = "#00ff00";
const DEFAULT_SECONDARY: &str = "#000000";
const ERROR_COLOR: &str = "#ff0000";
const FALLBACK_PRIMARY_RGB: &str = "0, 255, 0";

/// Display preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    pub primary_color: String,
    pub secondary_color: String,
    pub font_family: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            primary_color: DEFAULT_PRIMARY.to_string(),
            secondary_color: DEFAULT_SECONDARY.to_string(),
            font_family: AVAILABLE_FONTS[0].to_string(),
        }
    }
}

impl ThemeSettings {
    /// Rebuild settings from a persisted JSON record.
    ///
    /// Each field is validated on its own; an invalid or missing field takes
    /// its default while the valid ones are kept.
    fn from_persisted(record: &Value) -> Self {
        let defaults = Self::default();
        let field = |name: &str| record.get(name).and_then(Value::as_str);

        let primary_color = match field("primaryColor") {
            Some(c) if is_hex_color(c) => c.to_string(),
            other => {
                log::warn!("Ignoring persisted primaryColor {other:?}, using default");
                defaults.primary_color
            },
        };
        let secondary_color = match field("secondaryColor") {
            Some(c) if is_hex_color(c) => c.to_string(),
            other => {
                log::warn!("Ignoring persisted secondaryColor {other:?}, using default");
                defaults.secondary_color
            },
        };
        let font_family = match field("fontFamily") {
            Some(f) if is_available_font(f) => f.to_string(),
            other => {
                log::warn!("Ignoring persisted fontFamily {other:?}, using default");
                defaults.font_family
            },
        };

        Self {
            primary_color,
            secondary_color,
            font_family,
        }
    }
}

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&ThemeSettings)>;

/// Validated, persisted display preferences.
pub struct ThemeStore {
    settings: ThemeSettings,
    storage: Box<dyn SettingsStorage>,
    surface: Box<dyn StyleSurface>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl ThemeStore {
    /// Load settings from `storage` and apply them to `surface`.
    ///
    /// A record that is not valid JSON is discarded (and removed from
    /// storage); a record with some invalid fields keeps the valid ones.
    pub fn load(storage: Box<dyn SettingsStorage>, surface: Box<dyn StyleSurface>) -> Self {
        let mut store = Self {
            settings: ThemeSettings::default(),
            storage,
            surface,
            listeners: Vec::new(),
            next_subscription: 0,
        };
        store.settings = store.read_persisted();
        store.persist_and_apply();
        store
    }

    fn read_persisted(&mut self) -> ThemeSettings {
        let Some(raw) = self.storage.get(STORAGE_KEY) else {
            return ThemeSettings::default();
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(record) if record.is_object() => ThemeSettings::from_persisted(&record),
            Ok(_) | Err(_) => {
                log::error!("Failed to parse theme settings from storage, discarding record");
                if let Err(e) = self.storage.remove(STORAGE_KEY) {
                    log::warn!("Failed to remove invalid theme record: {e}");
                }
                ThemeSettings::default()
            },
        }
    }

    /// Snapshot of the current settings.
    pub fn get(&self) -> ThemeSettings {
        self.settings.clone()
    }

    /// The surface the settings are reflected into.
    pub fn surface(&self) -> &dyn StyleSurface {
        self.surface.as_ref()
    }

    /// Select a font. Fails (returns `false`) unless `font` is one of
    /// [`AVAILABLE_FONTS`].
    pub fn set_font(&mut self, font: &str) -> bool {
        if !is_available_font(font) {
            log::warn!("Font '{font}' is not available.");
            return false;
        }
        self.settings.font_family = font.to_string();
        self.changed();
        true
    }

    /// Set both colors. Neither is applied unless both are `#RRGGBB`.
    pub fn set_colors(&mut self, primary: &str, secondary: &str) -> bool {
        if !is_hex_color(primary) || !is_hex_color(secondary) {
            log::warn!("Invalid color format. Use hex codes like #RRGGBB.");
            return false;
        }
        self.settings.primary_color = primary.to_string();
        self.settings.secondary_color = secondary.to_string();
        self.changed();
        true
    }

    /// Restore the default settings.
    pub fn reset(&mut self) {
        self.settings = ThemeSettings::default();
        self.changed();
    }

    /// Register a listener called after every change, in registration order.
    pub fn subscribe(&mut self, listener: impl FnMut(&ThemeSettings) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn changed(&mut self) {
        self.persist_and_apply();
        for (_, listener) in &mut self.listeners {
            listener(&self.settings);
        }
    }

    fn persist_and_apply(&mut self) {
        match serde_json::to_string(&self.settings) {
            Ok(json) => {
                if let Err(e) = self.storage.set(STORAGE_KEY, &json) {
                    log::warn!("Failed to persist theme settings: {e}");
                }
            },
            Err(e) => log::error!("Failed to encode theme settings: {e}"),
        }
        self.apply();
    }

    fn apply(&mut self) {
        let s = &self.settings;
        let surface = self.surface.as_mut();
        surface.set_property("--primary-color", &s.primary_color);
        surface.set_property("--secondary-color", &s.secondary_color);
        surface.set_property("--font-family", &s.font_family);
        surface.set_property("--error-color", ERROR_COLOR);
        surface.set_property("--caret-color", &s.primary_color);
        let rgb = hex_to_rgb(&s.primary_color)
            .map(|rgb| rgb.to_triple_string())
            .unwrap_or_else(|| FALLBACK_PRIMARY_RGB.to_string());
        surface.set_property("--primary-color-rgb", &rgb);
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("settings", &self.settings)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
