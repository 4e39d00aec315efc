//! Environment-driven configuration shared by the journal service family.
//!
//! Services flatten [`Config`] into their own config struct and pull
//! service-specific values through [`get_env`], which enforces that required
//! settings are present (always in prod, and whenever no default exists).

use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// The socket address string to bind, e.g. `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Read a service-level environment variable with a prod-aware default.
pub fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_env_falls_back_to_default_outside_prod() {
        env::remove_var("JOURNAL_CORE_TEST_UNSET_KEY");
        let value = get_env("JOURNAL_CORE_TEST_UNSET_KEY", Some("fallback"), false).unwrap();
        assert_eq!(value, "fallback");
    }

    #[test]
    fn get_env_errors_when_required_value_is_missing() {
        env::remove_var("JOURNAL_CORE_TEST_REQUIRED_KEY");
        assert!(get_env("JOURNAL_CORE_TEST_REQUIRED_KEY", None, false).is_err());
    }

    #[test]
    fn get_env_ignores_defaults_in_prod() {
        env::remove_var("JOURNAL_CORE_TEST_PROD_KEY");
        assert!(get_env("JOURNAL_CORE_TEST_PROD_KEY", Some("fallback"), true).is_err());
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 9090,
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }
}
