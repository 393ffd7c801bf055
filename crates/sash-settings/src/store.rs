//! Settings file loading and rewriting.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{error, info};

use sash_common::SettingsError;

/// Persistent key-value settings backed by one pretty-printed JSON file.
///
/// The whole file is read once on open and rewritten in full on every
/// mutation. Values are flat scalars by convention; nesting is not
/// rejected, but nothing here merges partial updates.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    values: serde_json::Map<String, Value>,
}

impl SettingsStore {
    /// Open a settings file. A missing file starts an empty store; a file
    /// that exists but does not parse as a JSON object is fatal.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();

        if !path.exists() {
            info!("no settings found at {}, starting empty", path.display());
            return Ok(Self {
                path,
                values: serde_json::Map::new(),
            });
        }

        let content = std::fs::read_to_string(&path)?;
        let parsed: Value = serde_json::from_str(&content).map_err(|e| {
            error!("settings file {} is corrupt: {e}", path.display());
            SettingsError::Parse(format!("{}: {e}", path.display()))
        })?;

        let values = match parsed {
            Value::Object(map) => map,
            other => {
                error!("settings file {} is not a JSON object", path.display());
                return Err(SettingsError::Parse(format!(
                    "{}: expected a JSON object, found {other}",
                    path.display()
                )));
            }
        };

        info!("loaded {} settings from {}", values.len(), path.display());
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Set one key and rewrite the file.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Result<(), SettingsError> {
        self.values.insert(key.into(), value);
        self.save()
    }

    /// Remove one key, rewriting the file when it was present.
    pub fn remove(&mut self, key: &str) -> Result<bool, SettingsError> {
        if self.values.remove(key).is_none() {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    fn save(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.values)
            .map_err(|e| SettingsError::Parse(format!("serialize failed: {e}")))?;
        std::fs::write(&self.path, content)?;

        tracing::debug!("wrote {} settings to {}", self.values.len(), self.path.display());
        Ok(())
    }
}

/// Platform-specific default settings location, under the OS config dir.
pub fn default_settings_path() -> Result<PathBuf, SettingsError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| SettingsError::Parse("could not determine config directory".into()))?;
    Ok(config_dir.join("sash").join("settings.json"))
}
