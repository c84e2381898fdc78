//! Configuration file support for MedTrack.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/medtrack/config.toml`.
//! It covers presentation and session startup only; medication data itself
//! is never written anywhere.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

/// Display preferences for the terminal client
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Render times as 24-hour clock instead of am/pm
    #[serde(default)]
    pub use_24h_clock: bool,

    /// Show icon glyphs next to medications and section headers
    #[serde(default = "default_show_icons")]
    pub show_icons: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            use_24h_clock: false,
            show_icons: default_show_icons(),
        }
    }
}

/// Session startup options
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// Start every session with the built-in sample medications
    #[serde(default)]
    pub seed_samples: bool,
}

// Default value functions
fn default_show_icons() -> bool {
    true
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME")
                .expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("medtrack").join("config.toml")
    }
}
