//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PLAN_ENTITLEMENTS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use plan_entitlements::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod entitlements;
mod error;
mod server;
mod usage;

pub use entitlements::EntitlementsConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Deployment, ServerConfig};
pub use usage::UsageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Usage warning and block thresholds
    #[serde(default)]
    pub usage: UsageConfig,

    /// Plan catalog source
    #[serde(default)]
    pub entitlements: EntitlementsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PLAN_ENTITLEMENTS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PLAN_ENTITLEMENTS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PLAN_ENTITLEMENTS__USAGE__WARNING_THRESHOLD=75` -> `usage.warning_threshold = 75`
    /// - `PLAN_ENTITLEMENTS__ENTITLEMENTS__CATALOG_PATH=plans.yaml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PLAN_ENTITLEMENTS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// The plan catalog is not read here; see [`EntitlementsConfig::catalog`].
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.usage.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "PLAN_ENTITLEMENTS__SERVER__PORT",
        "PLAN_ENTITLEMENTS__SERVER__ENVIRONMENT",
        "PLAN_ENTITLEMENTS__SERVER__JSON_LOGS",
        "PLAN_ENTITLEMENTS__USAGE__WARNING_THRESHOLD",
        "PLAN_ENTITLEMENTS__USAGE__BLOCK_THRESHOLD",
        "PLAN_ENTITLEMENTS__ENTITLEMENTS__CATALOG_PATH",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Deployment::Development);
        assert_eq!(config.usage.warning_threshold, 80.0);
        assert!(config.entitlements.catalog_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PLAN_ENTITLEMENTS__SERVER__PORT", "3000");
        env::set_var("PLAN_ENTITLEMENTS__SERVER__JSON_LOGS", "true");
        env::set_var("PLAN_ENTITLEMENTS__USAGE__WARNING_THRESHOLD", "75");
        env::set_var("PLAN_ENTITLEMENTS__ENTITLEMENTS__CATALOG_PATH", "plans.yaml");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.server.json_logs);
        assert_eq!(config.usage.warning_threshold, 75.0);
        assert_eq!(
            config.entitlements.catalog_path.as_deref(),
            Some(std::path::Path::new("plans.yaml"))
        );
    }

    #[test]
    fn test_production_environment_forces_json_logs() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PLAN_ENTITLEMENTS__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.environment, Deployment::Production);
        assert!(!config.server.json_logs);
        assert!(config.server.emits_json_logs());
    }

    #[test]
    fn test_inverted_thresholds_fail_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PLAN_ENTITLEMENTS__USAGE__WARNING_THRESHOLD", "95");
        env::set_var("PLAN_ENTITLEMENTS__USAGE__BLOCK_THRESHOLD", "90");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidThresholds(_))
        ));
    }
}
