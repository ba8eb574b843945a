//! Tunable interaction and routing parameters.
//!
//! `SimulatorConfig` can be read from a TOML file; missing keys fall back to
//! the `DEFAULT_*` constants.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Clicks within this distance of a connection point snap onto it.
pub const DEFAULT_SNAP_RADIUS: f64 = 15.0;
/// Clicks within this distance of a wire path select the wire.
pub const DEFAULT_WIRE_HIT_THRESHOLD: f64 = 10.0;
/// Margin added around gate bodies when routing wires.
pub const DEFAULT_ROUTE_CLEARANCE: f64 = 5.0;

/// Runtime parameters of a [`Circuit`](crate::Circuit).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub snap_radius: f64,
    pub wire_hit_threshold: f64,
    pub route_clearance: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            snap_radius: DEFAULT_SNAP_RADIUS,
            wire_hit_threshold: DEFAULT_WIRE_HIT_THRESHOLD,
            route_clearance: DEFAULT_ROUTE_CLEARANCE,
        }
    }
}

impl SimulatorConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::InvalidValue` for negative or non-finite values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise the
    /// errors of [`Self::from_toml_str`].
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::from)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded simulator config");
        Ok(config)
    }

    /// Like [`Self::load_from_file`], but falls back to defaults on any error.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default simulator config");
                Self::default()
            }
        }
    }

    /// Serializes the configuration as pretty-printed TOML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self).map_err(ConfigError::from)?)
    }

    /// Checks that every distance is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("snap_radius", self.snap_radius),
            ("wire_hit_threshold", self.wire_hit_threshold),
            ("route_clearance", self.route_clearance),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value }.into());
            }
        }
        Ok(())
    }
}
