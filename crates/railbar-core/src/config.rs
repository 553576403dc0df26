//! Scrollbar configuration
//!
//! Tunables for thumb sizing and the scroll requests the overlay issues.
//! Loaded from TOML; every field is optional and falls back to the defaults
//! in [`crate::constants`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants;
use crate::error::{RailbarError, Result};
use crate::surface::ScrollBehavior;

/// Configuration for a scrollbar overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollbarConfig {
    /// Minimum thumb length in track pixels
    pub min_thumb: f64,
    /// Content units moved per step button activation
    pub step_amount: f64,
    /// How step button scrolls are animated
    pub step_behavior: ScrollBehavior,
    /// How track click scrolls are animated
    pub track_click_behavior: ScrollBehavior,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            min_thumb: constants::thumb::MIN_THUMB,
            step_amount: constants::step::STEP_AMOUNT,
            step_behavior: ScrollBehavior::Smooth,
            track_click_behavior: ScrollBehavior::Smooth,
        }
    }
}

impl ScrollbarConfig {
    /// Default config file path (`<config dir>/railbar/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(constants::config::CONFIG_DIR_NAME)
                .join(constants::config::CONFIG_FILE_NAME)
        })
    }

    /// Parse and validate a config from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, returning defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(RailbarError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let config = Self::from_toml(&text)?;
        debug!(path = %path.display(), ?config, "Loaded scrollbar config");
        Ok(config)
    }

    /// Load from an explicit path if given, else from the default location
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) => Self::load(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Render the config as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values that would break thumb sizing or stepping
    pub fn validate(&self) -> Result<()> {
        if !self.min_thumb.is_finite() || self.min_thumb <= 0.0 {
            return Err(RailbarError::InvalidConfig(format!(
                "min_thumb must be a positive number, got {}",
                self.min_thumb
            )));
        }
        if !self.step_amount.is_finite() || self.step_amount <= 0.0 {
            return Err(RailbarError::InvalidConfig(format!(
                "step_amount must be a positive number, got {}",
                self.step_amount
            )));
        }
        Ok(())
    }
}
