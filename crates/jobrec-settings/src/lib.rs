//! Persisted application settings.
//!
//! A single small JSON file remembers the last data file the user worked
//! with. Loading is forgiving (missing or unreadable settings fall back to
//! defaults); saving rewrites the whole file.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "jobrec";
const APP_NAME: &str = "Job Application Recorder";
const SETTINGS_FILENAME: &str = "appsettings.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to write settings {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// The persisted settings payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    #[serde(rename = "lastFilePathUsed")]
    pub last_file_path_used: Option<PathBuf>,
}

/// Settings store bound to one file on disk.
///
/// The path is injected by the composition root; [`SettingsStore::from_default_location`]
/// resolves the platform config directory for production use.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the platform-specific config directory.
    ///
    /// Returns `None` if the platform directory cannot be determined.
    pub fn from_default_location() -> Option<Self> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
            .map(|dirs| Self::new(dirs.config_dir().join(SETTINGS_FILENAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// cannot be parsed.
    pub fn load(&self) -> AppSettings {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(error) => {
                    tracing::warn!(path = %self.path.display(), %error,
                        "settings file unparsable, using defaults");
                    AppSettings::default()
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => AppSettings::default(),
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error,
                    "settings file unreadable, using defaults");
                AppSettings::default()
            }
        }
    }

    /// Rewrite the whole settings file, creating parent directories as needed.
    pub fn save(&self, settings: &AppSettings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: self.path.clone(),
                source,
            })?;
        }
        let contents = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, contents).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "saved settings");
        Ok(())
    }

    /// Persist `path` as the last-used data file.
    pub fn remember_last_file(&self, path: &Path) -> Result<(), SettingsError> {
        let mut settings = self.load();
        settings.last_file_path_used = Some(path.to_path_buf());
        self.save(&settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> SettingsStore {
        SettingsStore::new(dir.path().join("appsettings.json"))
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = store_in(&dir);
        assert_eq!(store.load(), AppSettings::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = store_in(&dir);
        let settings = AppSettings {
            last_file_path_used: Some(PathBuf::from("/tmp/x.json")),
        };
        store.save(&settings).expect("save settings");
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn settings_use_the_legacy_key_name() {
        let settings = AppSettings {
            last_file_path_used: Some(PathBuf::from("/tmp/x.json")),
        };
        let json = serde_json::to_string(&settings).expect("serialize");
        assert!(json.contains("\"lastFilePathUsed\""));
    }

    #[test]
    fn unparsable_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = store_in(&dir);
        fs::write(store.path(), "not json at all").expect("write garbage");
        assert_eq!(store.load(), AppSettings::default());
    }

    #[test]
    fn remember_last_file_updates_only_that_key() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = store_in(&dir);
        store
            .remember_last_file(Path::new("/tmp/data.json"))
            .expect("remember path");
        assert_eq!(
            store.load().last_file_path_used,
            Some(PathBuf::from("/tmp/data.json"))
        );
    }
}
