//! Site configuration.
//!
//! Loaded from `termfolio.toml`. Every field has a default so a partial (or
//! missing) file is valid.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, TermfolioError};

/// Top-level configuration for the terminal site.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// User name shown in the prompt.
    pub prompt_user: String,
    /// Host name shown in the prompt.
    pub hostname: String,
    /// Directory holding persisted settings (one file per key).
    pub settings_dir: PathBuf,
    /// Directory holding blog markdown files.
    pub blog_dir: PathBuf,
    /// Bind address for the contact endpoint.
    pub contact_addr: String,
    /// Probability that the simulated mail delivery succeeds.
    pub contact_success_rate: f64,
    /// Milliseconds per character for the welcome banner.
    pub typewriter_speed_ms: u32,
    /// Banner typed out on start.
    pub welcome: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            prompt_user: "guest".to_string(),
            hostname: "termfolio".to_string(),
            settings_dir: PathBuf::from(".termfolio"),
            blog_dir: PathBuf::from("content/blog"),
            contact_addr: "127.0.0.1:8080".to_string(),
            contact_success_rate: 0.9,
            typewriter_speed_ms: 50,
            welcome: "Welcome to my terminal portfolio. Type 'help' to begin.".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        if !(0.0..=1.0).contains(&config.contact_success_rate) {
            return Err(TermfolioError::Config(format!(
                "contact_success_rate must be within 0.0..=1.0, got {}",
                config.contact_success_rate
            )));
        }
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("{} not found, using default config", path.display());
                Ok(Self::default())
            },
            Err(e) => Err(e.into()),
        }
    }
}
