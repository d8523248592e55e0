//! Game settings and preferences
//!
//! Persisted separately from gameplay through a `SettingsStore`.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Game settings/preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sound effects on/off
    pub sfx: bool,
    /// Fullscreen window (desktop only)
    pub fullscreen: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sfx: true,
            fullscreen: false,
        }
    }
}

impl Settings {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Where settings live between sessions
pub trait SettingsStore {
    /// `Ok(None)` when nothing has been saved yet
    fn load(&mut self) -> Result<Option<Settings>>;
    fn save(&mut self, settings: &Settings) -> Result<()>;
}

/// Keeps settings for the lifetime of the process only
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Option<String>,
}

impl SettingsStore for MemoryStore {
    fn load(&mut self) -> Result<Option<Settings>> {
        self.saved.as_deref().map(Settings::from_json).transpose()
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        self.saved = Some(settings.to_json()?);
        Ok(())
    }
}

/// Settings as a JSON file on disk
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&mut self) -> Result<Option<Settings>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        Settings::from_json(&json).map(Some)
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        fs::write(&self.path, settings.to_json()?)?;
        log::info!("Settings saved to {}", self.path.display());
        Ok(())
    }
}
