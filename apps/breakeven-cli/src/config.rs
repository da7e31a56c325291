//! CLI configuration.
//!
//! ## Sources (Priority Order)
//! 1. Command-line flags (`--currency`, `--format`)
//! 2. Environment variables (`BREAKEVEN_*`)
//! 3. Config file (`--config <path>`, or `breakeven.toml` in the working
//!    directory if present)
//! 4. Defaults (this file)
//!
//! ```toml
//! # breakeven.toml
//! currency_symbol = "Q"
//! output_format = "json"
//! log_filter = "breakeven_core=debug"
//! ```

use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Default currency symbol (Guatemalan quetzal).
pub const DEFAULT_CURRENCY_SYMBOL: &str = "Q";

/// Prefix of the environment variables read by [`CliConfig::load`].
pub const ENV_PREFIX: &str = "BREAKEVEN";

/// Default tracing filter. `RUST_LOG` takes precedence when set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned, human-readable text with two-decimal money
    #[default]
    Text,

    /// Full-precision JSON
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Prefix shown before money amounts
    pub currency_symbol: String,

    /// Default output format
    pub output_format: OutputFormat,

    /// tracing-subscriber filter directive
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            output_format: OutputFormat::Text,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from file and environment over the defaults.
    ///
    /// An explicit `path` must exist; the implicit `breakeven.toml` is
    /// optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let defaults = CliConfig::default();

        let mut builder = Config::builder()
            .set_default("currency_symbol", defaults.currency_symbol)?
            .set_default("output_format", "text")?
            .set_default("log_filter", defaults.log_filter)?;

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("breakeven").required(false)),
        };

        let config: CliConfig = builder.add_source(env).build()?.try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Applies command-line overrides. Flags are held to the same rules as
    /// file and environment values.
    pub fn with_overrides(
        mut self,
        currency: Option<String>,
        format: Option<OutputFormat>,
    ) -> Result<Self, ConfigError> {
        if let Some(currency) = currency {
            self.currency_symbol = currency;
        }
        if let Some(format) = format {
            self.output_format = format;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.currency_symbol.chars().count() > 8 {
            return Err(ConfigError::InvalidValue("currency_symbol".to_string()));
        }
        Ok(())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}
