//! Preference Store - single-file key/value persistence.
//!
//! Holds the handful of persisted user choices (theme name, reduced-motion
//! override) as a string map in one JSON file under the platform config
//! directory. All disk I/O is best-effort: an unreadable, malformed, or
//! unwritable file silently degrades to an in-memory map for the session.
//! Nothing here is ever fatal to the host application.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// File name under the config directory.
const PREFS_FILE: &str = "prefs.json";

/// App directory under the platform config root.
const APP_DIR: &str = "folio-tui";

// =============================================================================
// Errors
// =============================================================================

/// Why a preference file could not be read.
///
/// Only used internally; `load`/`at_path` map any error to an empty map.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("preference file unreadable: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference file malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

// =============================================================================
// PrefStore
// =============================================================================

/// String key/value preference store backed by one JSON file.
#[derive(Debug, Clone)]
pub struct PrefStore {
    values: HashMap<String, String>,
    /// None means pure in-memory (storage unavailable or disabled).
    path: Option<PathBuf>,
}

impl PrefStore {
    /// Load from the platform config directory.
    ///
    /// Falls back to an in-memory store when no config directory can be
    /// determined.
    pub fn load() -> Self {
        match default_path() {
            Some(path) => Self::at_path(path),
            None => Self::in_memory(),
        }
    }

    /// Load from an explicit file path.
    ///
    /// A missing or malformed file yields an empty map; writes will still
    /// target `path`.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = read_values(&path).unwrap_or_default();
        Self {
            values,
            path: Some(path),
        }
    }

    /// Session-only store that never touches disk.
    pub fn in_memory() -> Self {
        Self {
            values: HashMap::new(),
            path: None,
        }
    }

    /// Look up a preference.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set a preference and flush to disk (best effort).
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
        self.flush();
    }

    /// Remove a preference and flush to disk (best effort).
    pub fn remove(&mut self, key: &str) {
        self.values.remove(key);
        self.flush();
    }

    /// Whether this store targets a file at all.
    pub fn is_persistent(&self) -> bool {
        self.path.is_some()
    }

    /// Write the map to disk. Failures leave the in-memory map authoritative
    /// for the session.
    fn flush(&self) {
        let Some(path) = &self.path else {
            return;
        };
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(&self.values) {
            let _ = fs::write(path, json);
        }
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(PREFS_FILE))
}

fn read_values(path: &Path) -> Result<HashMap<String, String>, PrefsError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_roundtrip() {
        let mut prefs = PrefStore::in_memory();
        assert!(!prefs.is_persistent());
        assert!(prefs.get("preferred-theme").is_none());

        prefs.set("preferred-theme", "earthy");
        assert_eq!(prefs.get("preferred-theme"), Some("earthy"));

        prefs.remove("preferred-theme");
        assert!(prefs.get("preferred-theme").is_none());
    }

    #[test]
    fn test_persists_across_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut prefs = PrefStore::at_path(&path);
        prefs.set("preferred-theme", "walnut");
        prefs.set("reduced-motion-override", "allow");
        drop(prefs);

        let reloaded = PrefStore::at_path(&path);
        assert_eq!(reloaded.get("preferred-theme"), Some("walnut"));
        assert_eq!(reloaded.get("reduced-motion-override"), Some("allow"));
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut prefs = PrefStore::at_path(&path);
        prefs.set("preferred-theme", "walnut");
        prefs.remove("preferred-theme");
        drop(prefs);

        let reloaded = PrefStore::at_path(&path);
        assert!(reloaded.get("preferred-theme").is_none());
    }

    #[test]
    fn test_missing_file_yields_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = PrefStore::at_path(dir.path().join("does-not-exist.json"));
        assert!(prefs.get("anything").is_none());
        assert!(prefs.is_persistent());
    }

    #[test]
    fn test_malformed_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{ not json").unwrap();

        let prefs = PrefStore::at_path(&path);
        assert!(prefs.get("preferred-theme").is_none());
    }

    #[test]
    fn test_unwritable_path_degrades_to_memory_for_session() {
        // Parent is a file, so create_dir_all and write both fail.
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let mut prefs = PrefStore::at_path(blocker.join("prefs.json"));
        prefs.set("preferred-theme", "earthy");

        // The in-memory value still applies for this session.
        assert_eq!(prefs.get("preferred-theme"), Some("earthy"));
    }

    #[test]
    fn test_set_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("prefs.json");

        let mut prefs = PrefStore::at_path(&path);
        prefs.set("k", "v");

        assert!(path.exists());
    }
}
