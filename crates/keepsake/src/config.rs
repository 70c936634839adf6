//! Card configuration: TOML, loaded once at startup, validated.
//!
//! Everything here is optional; an empty config file yields the stock
//! card. Example:
//!
//! ```toml
//! seed = 42
//!
//! [viewer]
//! multi_slide = true
//! keyboard = false
//!
//! [gesture]
//! pull_damping = 0.65
//! close_threshold = 140.0
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use keepsake_viewer::{GestureTuning, ViewerOptions};

/// Errors from loading or validating a card config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config parsed but carries an out-of-range value.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level card configuration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Seed for the confetti engine's deterministic RNG.
    pub seed: u64,
    /// Viewer capability flags.
    pub viewer: ViewerOptions,
    /// Gesture tuning constants.
    pub gesture: GestureTuning,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            seed: 0x5EED_CAFE_2EE5_9D00,
            viewer: ViewerOptions::default(),
            gesture: GestureTuning::default(),
        }
    }
}

impl CardConfig {
    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML and
    /// [`ConfigError::Invalid`] on out-of-range values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, plus
    /// everything [`Self::from_toml_str`] returns.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.gesture;

        if !(g.pull_damping > 0.0 && g.pull_damping <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "gesture.pull_damping must be in (0, 1], got {}",
                g.pull_damping
            )));
        }
        if g.pull_max <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "gesture.pull_max must be positive, got {}",
                g.pull_max
            )));
        }
        if g.close_threshold <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "gesture.close_threshold must be positive, got {}",
                g.close_threshold
            )));
        }
        if g.close_threshold > g.pull_max * g.pull_damping {
            return Err(ConfigError::Invalid(format!(
                "gesture.close_threshold {} is unreachable: max pull is {}",
                g.close_threshold,
                g.pull_max * g.pull_damping
            )));
        }
        if g.swipe_threshold <= 0.0 || g.intent_min < 0.0 {
            return Err(ConfigError::Invalid(
                "gesture swipe thresholds must be positive".to_owned(),
            ));
        }
        if g.axis_bias < 1.0 {
            return Err(ConfigError::Invalid(format!(
                "gesture.axis_bias must be at least 1, got {}",
                g.axis_bias
            )));
        }
        if g.snap_duration < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "gesture.snap_duration must not be negative, got {}",
                g.snap_duration
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_stock_card() {
        let config = CardConfig::from_toml_str("").expect("empty config parses");
        assert_eq!(config, CardConfig::default());
    }

    #[test]
    fn test_partial_overrides() {
        let config = CardConfig::from_toml_str(
            r#"
            seed = 7

            [viewer]
            keyboard = false

            [gesture]
            close_threshold = 120.0
            "#,
        )
        .expect("valid config");

        assert_eq!(config.seed, 7);
        assert!(!config.viewer.keyboard);
        assert!(config.viewer.multi_slide); // untouched default
        assert_eq!(config.gesture.close_threshold, 120.0);
        assert_eq!(config.gesture.pull_damping, 0.65);
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let err = CardConfig::from_toml_str("seed = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_damping_out_of_range_is_invalid() {
        let err = CardConfig::from_toml_str("[gesture]\npull_damping = 1.5").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_unreachable_close_threshold_is_invalid() {
        // Max pull = 100 * 0.5 = 50; a 140 threshold could never close.
        let err = CardConfig::from_toml_str(
            "[gesture]\npull_damping = 0.5\npull_max = 100.0",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_default_constants_preserve_parity() {
        let g = CardConfig::default().gesture;
        assert_eq!(g.pull_damping, 0.65);
        assert_eq!(g.pull_max, 220.0);
        assert_eq!(g.close_threshold, 140.0);
        assert_eq!(g.swipe_threshold, 50.0);
        assert_eq!(g.axis_bias, 1.2);
        assert_eq!(g.intent_min, 14.0);
    }
}
