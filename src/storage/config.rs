//! JSON configuration file.
//!
//! Stores settings in %APPDATA%/LangIndicator/config.json
//!
//! Keeps an in-memory copy so tray toggles never read the disk.
//! Call `flush()` to persist changes.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::model::constants::{APP_NAME, CONFIG_FILE_NAME};
use crate::model::Settings;

/// Directory holding the config and log files: %APPDATA%/LangIndicator
pub fn app_dir() -> PathBuf {
    let appdata = std::env::var_os("APPDATA").unwrap_or_else(|| ".".into());
    PathBuf::from(appdata).join(APP_NAME)
}

/// Cached settings backed by a JSON file.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    cache: Settings,
    dirty: bool,
}

impl ConfigStore {
    /// Get config file path: %APPDATA%/LangIndicator/config.json
    pub fn default_path() -> PathBuf {
        app_dir().join(CONFIG_FILE_NAME)
    }

    /// Load settings from `path`, using defaults if missing or invalid.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cache = load_from_disk(&path);
        Self {
            path,
            cache,
            dirty: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &Settings {
        &self.cache
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Modify the cached settings; they are validated and marked dirty.
    pub fn update(&mut self, f: impl FnOnce(&mut Settings)) {
        f(&mut self.cache);
        self.cache.validate();
        self.dirty = true;
    }

    /// Write the cache to disk if it changed since the last flush.
    pub fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        save_to_disk(&self.path, &self.cache)?;
        self.dirty = false;
        debug!(path = %self.path.display(), "config saved");
        Ok(())
    }
}

fn load_from_disk(path: &Path) -> Settings {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            debug!(path = %path.display(), "no config loaded: {}", e);
            return Settings::default();
        }
    };
    let mut settings = match serde_json::from_str::<Settings>(&contents) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(path = %path.display(), "ignoring invalid config: {}", e);
            Settings::default()
        }
    };
    settings.validate();
    settings
}

fn save_to_disk(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlacementMode;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::open(dir.path().join("config.json"));
        assert_eq!(store.settings(), &Settings::default());
        assert!(!store.is_dirty());
    }

    #[test]
    fn flush_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut store = ConfigStore::open(&path);
        store.update(|s| s.placement = PlacementMode::Corner);
        store.flush().unwrap();
        assert!(path.exists());
        assert!(!store.is_dirty());
    }

    #[test]
    fn clean_store_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut store = ConfigStore::open(&path);
        store.flush().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn invalid_json_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let store = ConfigStore::open(&path);
        assert_eq!(store.settings(), &Settings::default());
    }

    #[test]
    fn update_validates() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ConfigStore::open(dir.path().join("config.json"));
        store.update(|s| s.hide_delay_multiplier = -3.0);
        assert!((store.settings().hide_delay_multiplier - 1.0).abs() < f64::EPSILON);
        assert!(store.is_dirty());
    }

    #[test]
    fn flush_then_reopen_keeps_settings() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ConfigStore::open(dir.path().join("config.json"));
        store.update(|s| {
            s.placement = PlacementMode::Caret;
            s.show_symbol = true;
            s.hide_delay_multiplier = 1.4;
        });
        assert!(store.is_dirty());
        store.flush().unwrap();
        assert!(!store.is_dirty());

        let json = fs::read_to_string(store.path()).unwrap();
        assert!(json.contains("\"placement\": \"caret\""));

        let reopened = ConfigStore::open(store.path());
        assert_eq!(reopened.settings(), store.settings());
        assert!(!reopened.is_dirty());
    }
}
