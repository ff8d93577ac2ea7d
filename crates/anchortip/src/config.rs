//! Tooltip configuration, loadable from TOML.

use anchortip_layout::{PlacementEngine, DEFAULT_ARROW_SIZE, DEFAULT_MARGIN_FROM_START};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Arrow metrics shared by every tooltip a gate shows.
///
/// ```toml
/// arrow_size = 33
/// margin_from_start = 40
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Edge of the square arrow box in pixels
    pub arrow_size: i32,
    /// Distance from the container's leading edge to the arrow in pixels
    pub margin_from_start: i32,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            arrow_size: DEFAULT_ARROW_SIZE,
            margin_from_start: DEFAULT_MARGIN_FROM_START,
        }
    }
}

impl TooltipConfig {
    /// Parse and validate a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if TOML is invalid or values are out of range.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML string.
    #[must_use]
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Load a configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a non-positive arrow size or
    /// a negative margin.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arrow_size <= 0 {
            return Err(ConfigError::InvalidValue(format!(
                "arrow_size must be positive, got {}",
                self.arrow_size
            )));
        }
        if self.margin_from_start < 0 {
            return Err(ConfigError::InvalidValue(format!(
                "margin_from_start must not be negative, got {}",
                self.margin_from_start
            )));
        }
        Ok(())
    }

    /// Placement engine using these metrics.
    #[must_use]
    pub const fn engine(&self) -> PlacementEngine {
        PlacementEngine::new(self.arrow_size, self.margin_from_start)
    }
}
