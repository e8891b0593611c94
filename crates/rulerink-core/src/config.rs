//! Persisted snapping settings.

use crate::snap::SnapContext;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// User-facing snapping toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    /// Snap ruler endpoints to grid intersections.
    pub grid_snapping: bool,
    /// Snap ruler angles to multiples of 45 degrees.
    pub rotation_snapping: bool,
}

impl SnapSettings {
    /// Settings with both snapping modes enabled.
    pub fn all() -> Self {
        Self {
            grid_snapping: true,
            rotation_snapping: true,
        }
    }

    /// Parse settings from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    /// Serialize settings to pretty-printed JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    /// Default settings file location.
    ///
    /// On Unix: `~/.config/rulerink/snap.json`
    /// On Windows: `%APPDATA%\rulerink\snap.json`
    pub fn default_path() -> ConfigResult<PathBuf> {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("rulerink").join("snap.json"))
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            ConfigError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let settings = Self::from_json(&json)?;
        log::debug!("Loaded snap settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            log::debug!("No snap settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save settings to a JSON file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    ConfigError::Io(format!("Failed to create config directory: {}", e))
                })?;
            }
        }
        let json = self.to_json()?;
        fs::write(path, json)
            .map_err(|e| ConfigError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }
}

impl SnapContext for SnapSettings {
    fn is_grid_snapping(&self) -> bool {
        self.grid_snapping
    }

    fn is_rotation_snapping(&self) -> bool {
        self.rotation_snapping
    }
}
