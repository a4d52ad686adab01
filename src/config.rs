//! Page configuration parsed from an optional inline JSON block.
//!
//! The page may carry `<script id="page-config" type="application/json">`
//! with any subset of the fields below; missing fields take their defaults
//! and a missing block means all defaults.

use serde::Deserialize;

use crate::consts::{DEFAULT_HOVER_OPACITY, DEFAULT_LAZY_MARGIN_PX, DEFAULT_LOG_LEVEL, DEFAULT_REVEAL_THRESHOLD};
use crate::error::ConfigError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Opacity for sibling links and the logo while a nav link is hovered.
    pub hover_opacity: f64,
    /// Visible fraction that reveals a section.
    pub reveal_threshold: f64,
    /// Pre-load distance for lazy images, in CSS pixels.
    pub lazy_margin_px: f64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hover_opacity: DEFAULT_HOVER_OPACITY,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            lazy_margin_px: DEFAULT_LAZY_MARGIN_PX,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl Config {
    /// Parse and validate a JSON config block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed JSON, a fraction outside `[0, 1]`,
    /// a negative margin, or an unknown log level.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field ranges.
    ///
    /// # Errors
    ///
    /// See [`Config::from_json`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        unit_fraction("hover_opacity", self.hover_opacity)?;
        unit_fraction("reveal_threshold", self.reveal_threshold)?;
        if !(self.lazy_margin_px >= 0.0 && self.lazy_margin_px.is_finite()) {
            return Err(ConfigError::OutOfRange { field: "lazy_margin_px", value: self.lazy_margin_px });
        }
        self.level()?;
        Ok(())
    }

    /// The configured log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LogLevel`] when the name is not a `log` level.
    pub fn level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    /// Root margin string for the lazy image watch, e.g. `"200px"`.
    #[must_use]
    pub fn lazy_root_margin(&self) -> String {
        format!("{}px", self.lazy_margin_px)
    }
}

fn unit_fraction(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}
