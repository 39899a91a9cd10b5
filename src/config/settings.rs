//! Application settings

use crate::core::sections::{default_sections, Section};
use crate::i18n::Locale;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid TOML for [`AppConfig`]
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// The config could not be written as TOML
    #[error("Could not serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// No platform config directory
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application language
    pub locale: String,
    /// Window state
    pub window: WindowConfig,
    /// Connected server
    pub server: ServerConfig,
    /// Interface settings
    pub interface: InterfaceConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            window: WindowConfig::default(),
            server: ServerConfig::default(),
            interface: InterfaceConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load config from `path`, defaults when the file does not exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Get locale
    pub fn locale(&self) -> Locale {
        Locale::from_code(&self.locale).unwrap_or_default()
    }
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width
    pub width: f32,
    /// Window height
    pub height: f32,
    /// Maximized state
    pub maximized: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 640.0,
            maximized: false,
        }
    }
}

impl WindowConfig {
    /// Record the current window geometry, returning whether it changed.
    /// The size is left alone while maximized so the restored size survives.
    pub fn remember(&mut self, size: Option<[f32; 2]>, maximized: Option<bool>) -> bool {
        let mut changed = false;
        if let Some(maximized) = maximized {
            changed |= self.maximized != maximized;
            self.maximized = maximized;
        }
        if self.maximized {
            return changed;
        }
        if let Some([width, height]) = size.filter(|[w, h]| *w > 0.0 && *h > 0.0) {
            if (width - self.width).abs() > f32::EPSILON || (height - self.height).abs() > f32::EPSILON {
                self.width = width;
                self.height = height;
                changed = true;
            }
        }
        changed
    }
}

/// Server the GUI talks to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Display name shown in the window title
    pub name: String,
    /// Daemon host
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "Local".to_string(),
            host: "localhost".to_string(),
        }
    }
}

/// Color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark theme (default)
    #[default]
    Dark,
    /// Light theme
    Light,
}

impl ThemeMode {
    /// The other scheme
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Interface font scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontScale {
    /// 87.5%
    Small,
    /// 100%
    #[default]
    Normal,
    /// 112.5%
    Large,
    /// 125%
    Larger,
}

impl FontScale {
    /// Multiplier applied to the base text sizes
    pub fn factor(&self) -> f32 {
        match self {
            Self::Small => 0.875,
            Self::Normal => 1.0,
            Self::Large => 1.125,
            Self::Larger => 1.25,
        }
    }

    /// Next scale, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::Small => Self::Normal,
            Self::Normal => Self::Large,
            Self::Large => Self::Larger,
            Self::Larger => Self::Small,
        }
    }
}

/// Interface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterfaceConfig {
    /// Color scheme
    pub theme: ThemeMode,
    /// Font scale
    pub font_scale: FontScale,
    /// Status bar sums rates over all torrents instead of the filtered list
    pub status_bar_global_speeds: bool,
    /// Status bar sections
    pub status_bar_sections: Vec<Section>,
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            font_scale: FontScale::default(),
            status_bar_global_speeds: false,
            status_bar_sections: default_sections(),
        }
    }
}
