//! Application configuration management.

use std::path::Path;

use config::ConfigBuilder;
use config::builder::DefaultState;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Currency catalog configuration.
    pub catalog: CatalogConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Currency catalog configuration.
///
/// The built-in ISO 4217 table is always loaded; definitions listed here
/// add currencies to it or replace built-in entries with the same code.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Extra currency definitions.
    pub currencies: Vec<CurrencyDefinition>,
}

/// A currency definition supplied through configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrencyDefinition {
    /// Three-letter alphabetic code.
    pub code: String,
    /// ISO 4217 numeric code, if the currency has one.
    #[serde(default)]
    pub numeric_code: Option<u16>,
    /// Number of minor-unit digits.
    pub decimal_places: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "coinage=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(Self::layered().add_source(Self::environment()))
    }

    /// Loads configuration with an explicit file layered over the defaults.
    ///
    /// Unlike the `config/` files, `path` must exist. Environment variables
    /// still take precedence over it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or configuration cannot be loaded.
    pub fn load_file(path: &Path) -> Result<Self, config::ConfigError> {
        let builder = Self::layered()
            .add_source(config::File::from(path).required(true))
            .add_source(Self::environment());
        Self::build(builder)
    }

    fn layered() -> ConfigBuilder<DefaultState> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("COINAGE").separator("__")
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, config::ConfigError> {
        builder.build()?.try_deserialize()
    }
}
