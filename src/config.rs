//! Configuration management for string-validator
//!
//! Settings come from an optional `config.toml` in the working directory with
//! environment overrides (`STRING_VALIDATOR_DEFAULT_MAX_LENGTH`, `STRING_VALIDATOR_EXPLAIN`).

use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Config file looked up in the working directory
const CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "STRING_VALIDATOR";

/// Front end configuration
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Max length used when none is passed on the command line
    /// Environment: STRING_VALIDATOR_DEFAULT_MAX_LENGTH
    #[serde(default)]
    pub default_max_length: Option<i64>,

    /// Print the rules an input breaks to stderr
    /// Environment: STRING_VALIDATOR_EXPLAIN
    #[serde(default)]
    pub explain: bool,
}

impl ValidatorConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::new(CONFIG_FILE, FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: ValidatorConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(max_length) = self.default_max_length {
            if max_length < 1 {
                return Err(ConfigError::Message(format!(
                    "default_max_length must be at least 1, got {max_length}"
                )));
            }
        }

        Ok(())
    }
}
