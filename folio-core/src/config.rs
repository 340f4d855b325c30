//! Configuration management
//!
//! Settings live in `settings.json` in the data directory:
//! ```json
//! {
//!   "app": { "storageFile": "storage.json", "logging": true, ... }
//! }
//! ```
//! Fields this crate does not manage are preserved on save.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::result::Error;
use crate::services::logging::LOG_FILE_NAME;

/// Default name of the key-value storage file
pub const DEFAULT_STORAGE_FILE: &str = "storage.json";

const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    storage_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    logging: Option<bool>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Folio configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    /// File name (relative to the data directory) or absolute path of the
    /// key-value storage file
    pub storage_file: String,
    /// Whether the event log is written
    pub logging: bool,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_file: DEFAULT_STORAGE_FILE.to_string(),
            logging: true,
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the data directory
    ///
    /// Logging can be toggled via:
    /// 1. Settings file (`app.logging`)
    /// 2. Environment variable FOLIO_LOGGING (for CI/testing)
    pub fn load(data_dir: &Path) -> Result<Self> {
        let settings_path = data_dir.join(SETTINGS_FILE);

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let logging = match std::env::var("FOLIO_LOGGING").ok().as_deref() {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => true,
            Some("false" | "0" | "no" | "FALSE" | "NO") => false,
            _ => raw.app.logging.unwrap_or(true),
        };

        let storage_file = raw
            .app
            .storage_file
            .clone()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STORAGE_FILE.to_string());

        let file_name = Path::new(&storage_file).file_name().and_then(|n| n.to_str());
        if matches!(file_name, None | Some(SETTINGS_FILE) | Some(LOG_FILE_NAME)) {
            return Err(Error::Config(format!(
                "app.storageFile '{}' must name a file other than {} and {}",
                storage_file, SETTINGS_FILE, LOG_FILE_NAME
            ))
            .into());
        }

        Ok(Self {
            storage_file,
            logging,
            _raw_settings: raw,
        })
    }

    /// Save config to the data directory
    /// Preserves other settings that the CLI doesn't manage
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let settings_path = data_dir.join(SETTINGS_FILE);

        // Load existing settings to preserve fields we don't manage
        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            self._raw_settings.clone()
        };

        // Update only the fields we manage
        settings.app.storage_file = Some(self.storage_file.clone());
        settings.app.logging = Some(self.logging);

        std::fs::create_dir_all(data_dir)?;
        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// Resolve the storage file against the data directory
    pub fn storage_path(&self, data_dir: &Path) -> PathBuf {
        let file = Path::new(&self.storage_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            data_dir.join(file)
        }
    }
}
