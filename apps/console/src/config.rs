//! # Configuration
//!
//! Settings loaded once at startup and read-only afterwards.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--store-name`, ...)
//! 2. Environment variables (`SHOPCART_*`)
//! 3. Defaults (this file)
//!
//! | Key                 | Env var                      | Default          |
//! |---------------------|------------------------------|------------------|
//! | `store_name`        | `SHOPCART_STORE_NAME`        | `Console Store`  |
//! | `currency_symbol`   | `SHOPCART_CURRENCY_SYMBOL`   | `$`              |
//! | `max_item_quantity` | `SHOPCART_MAX_ITEM_QUANTITY` | `999`            |
//! | `log_level`         | `SHOPCART_LOG_LEVEL`         | `warn`           |

use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use shopcart_core::MAX_ITEM_QUANTITY;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

/// Prefix of every environment variable the console reads.
pub const ENV_PREFIX: &str = "SHOPCART";

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Shown in the welcome banner.
    pub store_name: String,

    /// Printed in front of every amount.
    pub currency_symbol: String,

    /// Largest quantity accepted for one cart line.
    pub max_item_quantity: u32,

    /// `tracing` filter directive used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        ShopConfig {
            store_name: "Console Store".to_string(),
            currency_symbol: "$".to_string(),
            max_item_quantity: MAX_ITEM_QUANTITY,
            log_level: "warn".to_string(),
        }
    }
}

impl ShopConfig {
    /// Loads configuration from defaults, `SHOPCART_*` variables and flags.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::load_with(cli, Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    /// Same as [`ShopConfig::load`] with an explicit environment source.
    pub fn load_with(cli: &Cli, environment: Environment) -> Result<Self, ConfigError> {
        let defaults = ShopConfig::default();

        let config = Config::builder()
            .set_default("store_name", defaults.store_name)?
            .set_default("currency_symbol", defaults.currency_symbol)?
            .set_default("max_item_quantity", i64::from(defaults.max_item_quantity))?
            .set_default("log_level", defaults.log_level)?
            .add_source(environment)
            .set_override_option("store_name", cli.store_name.clone())?
            .set_override_option("currency_symbol", cli.currency_symbol.clone())?
            .set_override_option("max_item_quantity", cli.max_quantity.map(i64::from))?
            .set_override_option("log_level", cli.log_level.clone())?
            .build()?
            .try_deserialize::<ShopConfig>()?;

        config.validate()?;
        Ok(config)
    }

    /// Checks values the type system cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "currency_symbol",
                reason: "must not be empty".to_string(),
            });
        }

        if self.max_item_quantity == 0 {
            return Err(ConfigError::Invalid {
                key: "max_item_quantity",
                reason: "must be at least 1".to_string(),
            });
        }

        EnvFilter::try_new(&self.log_level).map_err(|err| ConfigError::Invalid {
            key: "log_level",
            reason: err.to_string(),
        })?;

        Ok(())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .source(Some(source))
    }

    #[test]
    fn test_defaults() {
        let config = ShopConfig::load_with(&Cli::default(), env(&[])).unwrap();
        assert_eq!(config, ShopConfig::default());
        assert_eq!(config.max_item_quantity, 999);
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let config = ShopConfig::load_with(
            &Cli::default(),
            env(&[
                ("SHOPCART_STORE_NAME", "Night Market"),
                ("SHOPCART_MAX_ITEM_QUANTITY", "25"),
            ]),
        )
        .unwrap();

        assert_eq!(config.store_name, "Night Market");
        assert_eq!(config.max_item_quantity, 25);
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_flags_override_environment() {
        let cli = Cli {
            store_name: Some("Flag Store".to_string()),
            max_quantity: Some(5),
            ..Cli::default()
        };

        let config = ShopConfig::load_with(
            &cli,
            env(&[
                ("SHOPCART_STORE_NAME", "Env Store"),
                ("SHOPCART_MAX_ITEM_QUANTITY", "25"),
            ]),
        )
        .unwrap();

        assert_eq!(config.store_name, "Flag Store");
        assert_eq!(config.max_item_quantity, 5);
    }

    #[test]
    fn test_zero_max_quantity_rejected() {
        let cli = Cli {
            max_quantity: Some(0),
            ..Cli::default()
        };

        let err = ShopConfig::load_with(&cli, env(&[])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "max_item_quantity",
                ..
            }
        ));
    }

    #[test]
    fn test_blank_currency_symbol_rejected() {
        let config = ShopConfig {
            currency_symbol: "  ".to_string(),
            ..ShopConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unparseable_max_quantity_rejected() {
        let result = ShopConfig::load_with(
            &Cli::default(),
            env(&[("SHOPCART_MAX_ITEM_QUANTITY", "plenty")]),
        );
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }
}
