#![forbid(unsafe_code)]

//! Width configuration.
//!
//! [`WidthConfig`] gathers the tunables of the width registry and of every
//! selection model. Defaults reproduce the stock behavior, so
//! `WidthConfig::default()` never changes anything.
//!
//! # Loading
//!
//! ```toml
//! # bitwidth.toml
//! max_width = 32
//! history_limit = 5
//! ```
//!
//! ```rust,ignore
//! let config = WidthConfig::from_toml_file("bitwidth.toml")?;
//! let config = WidthConfig::from_json_str(r#"{"max_width": 32}"#)?;
//! ```
//!
//! Environment overrides (`BITWIDTH_MAX_WIDTH`, `BITWIDTH_HISTORY_LIMIT`) are
//! applied by [`WidthConfig::from_env`]; unparsable values are ignored.

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use crate::width::MAX_WIDTH;

/// Environment variable overriding [`WidthConfig::max_width`].
pub const ENV_MAX_WIDTH: &str = "BITWIDTH_MAX_WIDTH";

/// Environment variable overriding [`WidthConfig::history_limit`].
pub const ENV_HISTORY_LIMIT: &str = "BITWIDTH_HISTORY_LIMIT";

/// Tunables for the width registry and selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct WidthConfig {
    /// Largest canonical width (capped at [`MAX_WIDTH`]).
    pub max_width: u32,
    /// How many custom widths a selector remembers.
    pub history_limit: usize,
    /// Choice count at which a selector's fixed list is sparsified.
    pub sparse_threshold: usize,
    /// Stride between entries of a sparsified list.
    pub sparse_step: u32,
}

impl Default for WidthConfig {
    fn default() -> Self {
        Self {
            max_width: MAX_WIDTH,
            history_limit: 3,
            sparse_threshold: 8,
            sparse_step: 8,
        }
    }
}

impl WidthConfig {
    /// Defaults with environment overrides applied.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides taken from `lookup`.
    ///
    /// `lookup` receives the environment variable names; values that do not
    /// parse are skipped.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(max_width) = lookup(ENV_MAX_WIDTH).and_then(|v| v.trim().parse().ok()) {
            config.max_width = max_width;
        }
        if let Some(limit) = lookup(ENV_HISTORY_LIMIT).and_then(|v| v.trim().parse().ok()) {
            config.history_limit = limit;
        }
        config
    }

    /// Set the maximum width (builder).
    #[must_use]
    pub fn with_max_width(mut self, max_width: u32) -> Self {
        self.max_width = max_width;
        self
    }

    /// Set the custom-history capacity (builder).
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// `max_width` clamped into `1..=MAX_WIDTH`.
    #[must_use]
    pub fn effective_max_width(&self) -> u32 {
        self.max_width.clamp(1, MAX_WIDTH)
    }

    /// Check every parameter.
    ///
    /// Returns a list of problems; an empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_width == 0 || self.max_width > MAX_WIDTH {
            errors.push(format!(
                "max_width must be in 1..={MAX_WIDTH}, got {}",
                self.max_width
            ));
        }
        if self.history_limit == 0 {
            errors.push("history_limit must be > 0".into());
        }
        if self.sparse_threshold == 0 {
            errors.push("sparse_threshold must be > 0".into());
        }
        if self.sparse_step == 0 || self.sparse_step > MAX_WIDTH {
            errors.push(format!(
                "sparse_step must be in 1..={MAX_WIDTH}, got {}",
                self.sparse_step
            ));
        }

        errors
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str::<Self>(s)?.validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<Self>(s)?.validated()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Pick the loader from the file extension (`.json`, anything else is TOML).
    #[cfg(feature = "config")]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Serialize to a pretty TOML string.
    #[cfg(feature = "config")]
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    #[cfg(feature = "config")]
    fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }
}

/// Errors from loading a [`WidthConfig`].
#[cfg(feature = "config")]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading the config file failed.
    #[error("failed to read width config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML did not deserialize.
    #[error("invalid TOML width config: {0}")]
    Toml(#[from] toml::de::Error),
    /// TOML did not serialize.
    #[error("failed to write TOML width config: {0}")]
    TomlWrite(#[from] toml::ser::Error),
    /// JSON did not deserialize.
    #[error("invalid JSON width config: {0}")]
    Json(#[from] serde_json::Error),
    /// The values failed [`WidthConfig::validate`].
    #[error("invalid width config: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn default_config_is_valid() {
        let config = WidthConfig::default();
        assert!(config.validate().is_empty());
        assert_eq!(config.max_width, 64);
        assert_eq!(config.history_limit, 3);
        assert_eq!(config.sparse_threshold, 8);
        assert_eq!(config.sparse_step, 8);
    }

    #[test]
    fn validate_reports_every_problem() {
        let config = WidthConfig {
            max_width: 0,
            history_limit: 0,
            sparse_threshold: 0,
            sparse_step: 0,
        };
        assert_eq!(config.validate().len(), 4);

        let too_wide = WidthConfig::default().with_max_width(65);
        assert_eq!(
            too_wide.validate(),
            vec!["max_width must be in 1..=64, got 65".to_string()]
        );
    }

    #[test]
    fn validate_rejects_wide_sparse_step() {
        let config = WidthConfig {
            sparse_step: u32::MAX,
            ..WidthConfig::default()
        };
        assert_eq!(
            config.validate(),
            vec![format!("sparse_step must be in 1..=64, got {}", u32::MAX)]
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn toml_rejects_wide_sparse_step() {
        let err = WidthConfig::from_toml_str("sparse_step = 4294967295").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref errors) if errors.len() == 1));
    }

    #[test]
    fn lookup_overrides_apply() {
        let env: HashMap<&str, &str> =
            HashMap::from([(ENV_MAX_WIDTH, "32"), (ENV_HISTORY_LIMIT, " 5 ")]);
        let config = WidthConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.max_width, 32);
        assert_eq!(config.history_limit, 5);
    }

    #[test]
    fn unparsable_overrides_are_ignored() {
        let config = WidthConfig::from_lookup(|_| Some("lots".to_string()));
        assert_eq!(config, WidthConfig::default());
    }

    #[test]
    fn effective_max_width_clamps() {
        assert_eq!(WidthConfig::default().with_max_width(0).effective_max_width(), 1);
        assert_eq!(WidthConfig::default().with_max_width(99).effective_max_width(), 64);
    }

    #[cfg(feature = "config")]
    #[test]
    fn toml_partial_uses_defaults() {
        let config = WidthConfig::from_toml_str("max_width = 16\n").unwrap();
        assert_eq!(config.max_width, 16);
        assert_eq!(config.history_limit, 3);
    }

    #[cfg(feature = "config")]
    #[test]
    fn json_rejects_invalid_values() {
        let err = WidthConfig::from_json_str(r#"{"history_limit": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref errors) if errors.len() == 1));
    }

    #[cfg(feature = "config")]
    #[test]
    fn toml_written_config_loads_back() {
        let config = WidthConfig::default().with_history_limit(4);
        let text = config.to_toml_string().unwrap();
        assert_eq!(WidthConfig::from_toml_str(&text).unwrap(), config);
    }
}
