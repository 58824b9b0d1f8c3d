// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "KinGallery";

/// Thumbnail width in the gallery column, in logical pixels.
pub const DEFAULT_THUMBNAIL_SIZE: f32 = 160.0;
/// Thumbnail width while hovered.
pub const DEFAULT_HOVER_SIZE: f32 = 320.0;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub thumbnail_size: Option<f32>,
    #[serde(default)]
    pub hover_size: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            thumbnail_size: Some(DEFAULT_THUMBNAIL_SIZE),
            hover_size: Some(DEFAULT_HOVER_SIZE),
        }
    }
}

impl Config {
    /// Effective thumbnail width, falling back to the default.
    #[must_use]
    pub fn thumbnail_size(&self) -> f32 {
        self.thumbnail_size.unwrap_or(DEFAULT_THUMBNAIL_SIZE)
    }

    /// Effective hover width, never smaller than the thumbnail width.
    #[must_use]
    pub fn hover_size(&self) -> f32 {
        self.hover_size
            .unwrap_or(DEFAULT_HOVER_SIZE)
            .max(self.thumbnail_size())
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            language: Some("fr".to_string()),
            thumbnail_size: Some(120.0),
            hover_size: Some(240.0),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.thumbnail_size, config.thumbnail_size);
        assert_eq!(loaded.hover_size, config.hover_size);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
    }

    #[test]
    fn hover_size_never_shrinks_below_thumbnail_size() {
        let config = Config {
            language: None,
            thumbnail_size: Some(300.0),
            hover_size: Some(100.0),
        };
        assert_eq!(config.hover_size(), 300.0);
    }

    #[test]
    fn default_config_sets_sizes() {
        let config = Config::default();
        assert_eq!(config.thumbnail_size(), DEFAULT_THUMBNAIL_SIZE);
        assert_eq!(config.hover_size(), DEFAULT_HOVER_SIZE);
    }
}
