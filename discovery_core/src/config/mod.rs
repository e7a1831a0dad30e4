//! Game configuration, loaded from TOML.
//!
//! Every field has a default, so an empty document is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors raised while loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid TOML for the expected shape.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// A value is outside its allowed range.
    #[error("invalid config: {reason}")]
    Invalid { reason: String },
}

/// Settings for the rejection-sampling placer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Width of the play area.
    pub width: f64,

    /// Height of the play area.
    pub height: f64,

    /// Inner margin kept free along each edge of the sampling region.
    pub margin: f64,

    /// Extra gap required between two node shapes.
    pub buffer: f64,

    /// Radius of a node whose label is short.
    pub min_radius: f64,

    /// Horizontal space taken by one rendered character.
    pub char_width: f64,

    /// Candidates drawn before widening the sampling region.
    pub attempts_per_round: u32,

    /// Number of sampling rounds before the fallback spot is used.
    pub max_rounds: u32,

    /// Scale factor applied to the sampling region after each failed round.
    pub growth: f64,

    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            margin: 40.0,
            buffer: 10.0,
            min_radius: 15.0,
            char_width: 7.0,
            attempts_per_round: 64,
            max_rounds: 8,
            growth: 1.5,
            seed: None,
        }
    }
}

impl PlacementConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the play area size.
    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("min_radius", self.min_radius),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("placement.{} must be positive, got {}", name, value)));
            }
        }

        let non_negative = [
            ("margin", self.margin),
            ("buffer", self.buffer),
            ("char_width", self.char_width),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(format!(
                    "placement.{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        if self.margin * 2.0 >= self.width.min(self.height) {
            return Err(invalid(format!(
                "placement.margin ({}) leaves no room inside a {}x{} viewport",
                self.margin, self.width, self.height
            )));
        }
        if !(self.growth.is_finite() && self.growth >= 1.0) {
            return Err(invalid(format!(
                "placement.growth must be at least 1.0, got {}",
                self.growth
            )));
        }
        if self.attempts_per_round == 0 || self.max_rounds == 0 {
            return Err(invalid(
                "placement.attempts_per_round and placement.max_rounds must be at least 1"
                    .to_string(),
            ));
        }
        let widest = self.width.max(self.height) * self.growth.powf(f64::from(self.max_rounds - 1));
        if !widest.is_finite() {
            return Err(invalid(format!(
                "placement.growth ({}) over {} rounds widens the sampling region past any size",
                self.growth, self.max_rounds
            )));
        }

        Ok(())
    }
}

/// Top-level game configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of guesses kept in the guess log.
    pub history_len: usize,

    pub placement: PlacementConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            history_len: 10,
            placement: PlacementConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Set the placement settings.
    pub fn with_placement(mut self, placement: PlacementConfig) -> Self {
        self.placement = placement;
        self
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.placement.validate()
    }
}

fn invalid(reason: String) -> ConfigError {
    ConfigError::Invalid { reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.history_len, 10);
        assert!(config.placement.seed.is_none());
    }

    #[test]
    fn test_partial_document() {
        let config = GameConfig::from_toml_str(
            r#"
            history_len = 5

            [placement]
            width = 800.0
            height = 600.0
            seed = 7
            "#,
        )
        .unwrap();

        assert_eq!(config.history_len, 5);
        assert_eq!(config.placement.width, 800.0);
        assert_eq!(config.placement.seed, Some(7));
        assert_eq!(config.placement.buffer, 10.0);
    }

    #[test]
    fn test_parse_error() {
        let result = GameConfig::from_toml_str("history_len = \"ten\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_rejects_margin_larger_than_viewport() {
        let result = GameConfig::from_toml_str(
            r#"
            [placement]
            width = 100.0
            height = 100.0
            margin = 60.0
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_rejects_shrinking_growth() {
        let placement = PlacementConfig {
            growth: 0.5,
            ..Default::default()
        };
        assert!(matches!(placement.validate(), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_rejects_unbounded_growth() {
        let result = GameConfig::from_toml_str(
            r#"
            [placement]
            growth = 1e200
            max_rounds = 4
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));

        let placement = PlacementConfig {
            growth: 1e200,
            max_rounds: 1,
            ..Default::default()
        };
        assert!(placement.validate().is_ok());
    }

    #[test]
    fn test_huge_history_len_is_accepted() {
        let config = GameConfig::from_toml_str("history_len = 9223372036854775807").unwrap();
        assert_eq!(config.history_len, 9223372036854775807);
    }

    #[test]
    fn test_rejects_zero_attempts() {
        let placement = PlacementConfig {
            attempts_per_round: 0,
            ..Default::default()
        };
        assert!(placement.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = GameConfig::from_path("/definitely/not/here/word_web.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
