//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `GAMEFLIX` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use gameflix::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod database;
mod error;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Authentication configuration (password pepper)
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `GAMEFLIX` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `GAMEFLIX__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `GAMEFLIX__DATABASE__URL=...` -> `database.url = ...`
    /// - `GAMEFLIX__AUTH__PASSWORD_PEPPER=...` -> `auth.password_pepper = ...`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GAMEFLIX")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("GAMEFLIX__DATABASE__URL", "postgresql://test@localhost/test");
        env::set_var("GAMEFLIX__AUTH__PASSWORD_PEPPER", "test-pepper-0123456789");
    }

    fn clear_env() {
        env::remove_var("GAMEFLIX__DATABASE__URL");
        env::remove_var("GAMEFLIX__AUTH__PASSWORD_PEPPER");
        env::remove_var("GAMEFLIX__SERVER__PORT");
    }

    #[test]
    fn loads_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();

        let config = AppConfig::load().unwrap();
        assert_eq!(config.database.url, "postgresql://test@localhost/test");
        assert_eq!(config.server.port, 8080);
        assert!(config.validate().is_ok());

        clear_env();
    }

    #[test]
    fn nested_overrides_apply() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("GAMEFLIX__SERVER__PORT", "3000");

        let config = AppConfig::load().unwrap();
        assert_eq!(config.server.port, 3000);

        clear_env();
    }
}
