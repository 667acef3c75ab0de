//! Error types for termfolio.

use std::io;

/// Errors produced by the termfolio crates.
#[derive(Debug, thiserror::Error)]
pub enum TermfolioError {
    /// A command action failed. The message is shown verbatim to the user.
    #[error("{0}")]
    Command(String),

    #[error("navigation error: {0}")]
    Navigation(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("mail error: {0}")]
    Mail(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("front matter error: {0}")]
    FrontMatter(#[from] serde_yaml::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TermfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_error_display_is_bare_message() {
        let e = TermfolioError::Command("disk on fire".into());
        assert_eq!(format!("{e}"), "disk on fire");
    }

    #[test]
    fn navigation_error_display() {
        let e = TermfolioError::Navigation("route aborted".into());
        assert_eq!(format!("{e}"), "navigation error: route aborted");
    }

    #[test]
    fn config_error_display() {
        let e = TermfolioError::Config("missing key".into());
        assert_eq!(format!("{e}"), "config error: missing key");
    }

    #[test]
    fn storage_error_display() {
        let e = TermfolioError::Storage("quota exceeded".into());
        assert_eq!(format!("{e}"), "storage error: quota exceeded");
    }

    #[test]
    fn mail_error_display() {
        let e = TermfolioError::Mail("relay refused".into());
        assert_eq!(format!("{e}"), "mail error: relay refused");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: TermfolioError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("this is [[[not valid toml").unwrap_err();
        let e: TermfolioError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: TermfolioError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn yaml_error_from_conversion() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("a: [unclosed").unwrap_err();
        let e: TermfolioError = yaml_err.into();
        assert!(format!("{e}").contains("front matter error"));
    }
}
