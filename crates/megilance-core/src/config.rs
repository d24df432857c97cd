//! Client configuration.
//!
//! Values come from `<data_dir>/config.json` when present and are then
//! overridden by command-line flags. Every field has a default, so a
//! missing file is not an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::UiError;
use crate::theme::Theme;

/// File name looked up inside the data directory.
pub const CONFIG_FILE: &str = "config.json";

/// Storage file name inside the data directory.
pub const STORAGE_FILE: &str = "client.redb";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Theme forced at startup, overriding the stored preference.
    pub theme: Option<Theme>,
    /// Tracing filter directive, e.g. `info,megilance_core=debug`.
    pub log_filter: String,
    /// Also write a JSONL session log under `<data_dir>/logs`.
    pub log_json: bool,
    /// Announcement shown in the app chrome, if any.
    pub announcement: Option<AnnouncementConfig>,
    /// Signed-in user name shown in the profile menu.
    pub user_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnnouncementConfig {
    pub id: String,
    pub message: String,
    #[serde(default)]
    pub cta_label: Option<String>,
    #[serde(default)]
    pub cta_href: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            theme: None,
            log_filter: "info".to_string(),
            log_json: false,
            announcement: Some(AnnouncementConfig {
                id: "welcome".to_string(),
                message: "Welcome to MegiLance! AI-assisted matching is now live.".to_string(),
                cta_label: Some("Learn more".to_string()),
                cta_href: Some("/how-it-works".to_string()),
            }),
            user_name: "Guest User".to_string(),
        }
    }
}

impl ClientConfig {
    /// Load `<data_dir>/config.json`, or defaults when the file is absent.
    pub fn load(data_dir: &Path) -> Result<Self, UiError> {
        let path = data_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        serde_json::from_str(&raw)
            .map_err(|e| UiError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write the config back to `<data_dir>/config.json`.
    pub fn save(&self, data_dir: &Path) -> Result<(), UiError> {
        std::fs::create_dir_all(data_dir)?;
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(data_dir.join(CONFIG_FILE), raw)?;
        Ok(())
    }
}

/// Default data directory: `<platform data dir>/megilance[-<name>]`.
pub fn default_data_dir(name: Option<&str>) -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    match name {
        Some(name) if !name.is_empty() => base.join(format!("megilance-{}", name)),
        _ => base.join("megilance"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        assert_eq!(ClientConfig::load(dir.path()).unwrap(), ClientConfig::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), r#"{ "theme": "dark" }"#).unwrap();
        let config = ClientConfig::load(dir.path()).unwrap();
        assert_eq!(config.theme, Some(Theme::Dark));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let config = ClientConfig {
            log_json: true,
            announcement: None,
            ..Default::default()
        };
        config.save(dir.path()).unwrap();
        assert_eq!(ClientConfig::load(dir.path()).unwrap(), config);
    }

    #[test]
    fn malformed_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{ nope").unwrap();
        assert!(matches!(ClientConfig::load(dir.path()), Err(UiError::Config(_))));
    }

    #[test]
    fn data_dir_naming() {
        assert!(default_data_dir(None).ends_with("megilance"));
        assert!(default_data_dir(Some("two")).ends_with("megilance-two"));
    }
}
