//! Configuration management for Numina.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `numina.toml` file
//! 3. User config `~/.config/numina/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Graph traversal defaults.
    pub traversal: TraversalConfig,

    /// Pattern synthesis configuration.
    pub synthesis: SynthesisConfig,

    /// Narrative generation configuration.
    pub narrative: NarrativeConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./numina.toml` (project local)
    /// 2. `~/.config/numina/config.toml` (user config)
    /// 3. Falls back to defaults
    ///
    /// Environment overrides apply in every case.
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(PROJECT_CONFIG_FILE).exists() {
            return Self::from_file(PROJECT_CONFIG_FILE);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE);
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(depth) = std::env::var("NUMINA_MAX_DEPTH") {
            if let Ok(n) = depth.parse() {
                self.traversal.max_depth = n;
            }
        }
        if let Ok(weight) = std::env::var("NUMINA_MIN_WEIGHT") {
            if let Ok(n) = weight.parse() {
                self.traversal.min_weight = n;
                self.synthesis.min_weight = n;
            }
        }
        if let Ok(budget) = std::env::var("NUMINA_TOKEN_BUDGET") {
            if let Ok(n) = budget.parse() {
                self.narrative.token_budget = n;
            }
        }
    }

    /// Reject values that would make the estimate or traversal meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.narrative.chars_per_token == 0 {
            return Err(ConfigError::Invalid(
                "narrative.chars_per_token must be at least 1".to_string(),
            ));
        }
        if self.narrative.token_budget == 0 {
            return Err(ConfigError::Invalid(
                "narrative.token_budget must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Graph traversal defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Maximum number of hops from a seed.
    pub max_depth: usize,

    /// Minimum edge weight that will be followed.
    pub min_weight: u8,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            min_weight: DEFAULT_MIN_WEIGHT,
        }
    }
}

/// Pattern synthesis configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Traversal depth from the pattern's digits.
    pub depth: usize,

    /// Minimum edge weight the synthesis traversal follows.
    pub min_weight: u8,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SYNTHESIS_DEPTH,
            min_weight: DEFAULT_MIN_WEIGHT,
        }
    }
}

/// Narrative generation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    /// Maximum estimated tokens for a narrative.
    pub token_budget: usize,

    /// Characters counted as one token by the estimate.
    pub chars_per_token: usize,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            token_budget: DEFAULT_TOKEN_BUDGET,
            chars_per_token: DEFAULT_CHARS_PER_TOKEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.traversal.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.traversal.min_weight, DEFAULT_MIN_WEIGHT);
        assert_eq!(config.narrative.token_budget, DEFAULT_TOKEN_BUDGET);
    }

    #[test]
    fn test_config_to_toml() {
        let toml_str = Config::default_config_string();
        assert!(toml_str.contains("[traversal]"));
        assert!(toml_str.contains("[synthesis]"));
        assert!(toml_str.contains("[narrative]"));
    }

    #[test]
    fn test_validate_rejects_zero_chars_per_token() {
        let mut config = Config::default();
        config.narrative.chars_per_token = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
