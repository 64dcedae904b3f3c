use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

/// String-keyed preferences map with typed reads and JSON file backing.
///
/// Reads never fail: a missing key, or a value of the wrong type, yields the
/// caller's default. Writes are in-memory; `save` flushes to disk.
#[derive(Debug)]
pub struct Settings {
    path: Option<PathBuf>,
    data: Mutex<BTreeMap<String, SettingValue>>,
}

impl Settings {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let data = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path: Some(path),
            data: Mutex::new(data),
        })
    }

    /// A store with no backing file; `save` is a no-op.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn default_path() -> Result<PathBuf, SettingsError> {
        let mut config_dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::Read(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no config directory",
            ))
        })?;
        config_dir.push("ResonateStudio");
        fs::create_dir_all(&config_dir)?;
        config_dir.push("preferences.json");
        Ok(config_dir)
    }

    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        match self.data.lock().get(key) {
            Some(SettingValue::Bool(value)) => *value,
            _ => default,
        }
    }

    pub fn int_or(&self, key: &str, default: i64) -> i64 {
        match self.data.lock().get(key) {
            Some(SettingValue::Int(value)) => *value,
            _ => default,
        }
    }

    pub fn str_or(&self, key: &str, default: &str) -> String {
        match self.data.lock().get(key) {
            Some(SettingValue::Str(value)) => value.clone(),
            _ => default.to_owned(),
        }
    }

    pub fn set_bool(&self, key: impl Into<String>, value: bool) {
        self.data.lock().insert(key.into(), SettingValue::Bool(value));
    }

    pub fn set_int(&self, key: impl Into<String>, value: i64) {
        self.data.lock().insert(key.into(), SettingValue::Int(value));
    }

    pub fn set_str(&self, key: impl Into<String>, value: impl Into<String>) {
        self.data
            .lock()
            .insert(key.into(), SettingValue::Str(value.into()));
    }

    pub fn contains(&self, key: &str) -> bool {
        self.data.lock().contains_key(key)
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(&*self.data.lock())?;
        fs::write(path, json)?;
        Ok(())
    }
}
