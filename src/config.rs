//! Configuration file handling for framestamp.
//!
//! Loads configuration from `~/.config/framestamp/config.toml` or a custom
//! path. Every field has a default, so a missing file or a partial file is
//! fine; CLI arguments override whatever the file says.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file structure for framestamp.
/// Loaded from ~/.config/framestamp/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub overlay: OverlayConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Overlay placement and colors.
#[derive(Debug, Deserialize)]
pub struct OverlayConfig {
    /// Horizontal text origin. Pixels in gray8 mode, byte columns in
    /// packed mode.
    #[serde(default = "default_origin")]
    pub x: u32,
    /// Vertical text origin in pixels.
    #[serde(default = "default_origin")]
    pub y: u32,
    /// Draw the one-pixel contrast halo (gray8 mode only).
    #[serde(default = "default_true")]
    pub halo: bool,
    /// Foreground gray value.
    #[serde(default = "default_foreground")]
    pub foreground: u8,
    /// Halo gray value.
    #[serde(default)]
    pub background: u8,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            x: default_origin(),
            y: default_origin(),
            halo: true,
            foreground: default_foreground(),
            background: 0,
        }
    }
}

/// Default frame dimensions and encoding for new buffers.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// "gray8" or "packed".
    #[serde(default)]
    pub mode: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            mode: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_origin() -> u32 {
    8
}

fn default_foreground() -> u8 {
    255
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            Ok(config)
        } else {
            log::debug!("no config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        })
        .join("framestamp")
        .join("config.toml")
}
