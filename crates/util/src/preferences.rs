//! User preference persistence for the Starling demo.
//!
//! A tiny JSON-backed store that records the preferred theme. The file lives
//! in the standard configuration directory (`~/.config/starling/preferences.json`
//! on most platforms) unless `STARLING_PREFERENCES_PATH` points elsewhere.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::path_processing::path_from_env;

/// Environment variable allowing callers to override the preferences file path.
pub const PREFERENCES_PATH_ENV: &str = "STARLING_PREFERENCES_PATH";

/// Default filename for the JSON payload.
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Error surfaced when reading or writing preferences fails.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// I/O failure (for example, permissions or missing directory).
    #[error("preferences I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization failure.
    #[error("preferences serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persisted preference values.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesPayload {
    pub preferred_theme: Option<String>,
}

/// Preferences store backed by a JSON file.
///
/// The demo runs its UI on one thread, so the payload sits in a `RefCell`.
#[derive(Debug, Default)]
pub struct UserPreferences {
    path: PathBuf,
    payload: RefCell<PreferencesPayload>,
    persist_to_disk: bool,
}

impl UserPreferences {
    /// Opens the store at the default location.
    pub fn new() -> Result<Self, PreferencesError> {
        Self::at(default_preferences_path())
    }

    /// Opens the store at `path`; a missing file yields default preferences.
    pub fn at(path: PathBuf) -> Result<Self, PreferencesError> {
        let payload = load_payload(&path)?;
        Ok(Self {
            path,
            payload: RefCell::new(payload),
            persist_to_disk: true,
        })
    }

    /// In-memory store used when the config directory cannot be accessed.
    pub fn ephemeral() -> Self {
        Self {
            path: PathBuf::new(),
            payload: RefCell::new(PreferencesPayload::default()),
            persist_to_disk: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn preferred_theme(&self) -> Option<String> {
        self.payload.borrow().preferred_theme.clone()
    }

    /// Records the preferred theme and writes it through to disk.
    pub fn set_preferred_theme(&self, theme_id: Option<String>) -> Result<(), PreferencesError> {
        let mut payload = self.payload.borrow_mut();
        payload.preferred_theme = theme_id;
        if self.persist_to_disk {
            self.save(&payload)?;
        }
        Ok(())
    }

    fn save(&self, payload: &PreferencesPayload) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(payload)?)?;
        Ok(())
    }
}

fn default_preferences_path() -> PathBuf {
    path_from_env(PREFERENCES_PATH_ENV).unwrap_or_else(|| {
        config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("starling")
            .join(PREFERENCES_FILE_NAME)
    })
}

fn load_payload(path: &Path) -> Result<PreferencesPayload, PreferencesError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(payload) => Ok(payload),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse preferences file; using defaults"
                );
                Ok(PreferencesPayload::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(PreferencesPayload::default()),
        Err(error) => Err(PreferencesError::Io(error)),
    }
}
