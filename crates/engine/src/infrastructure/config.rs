//! Application configuration

use std::env;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Host to bind the HTTP server to
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,

    /// CORS allowed origins (comma-separated, or "*" for any); empty disables CORS
    pub cors_allowed_origins: Vec<String>,

    /// Record store configuration
    pub store: StoreConfig,

    /// Catalog engine tuning
    pub catalog: CatalogConfig,
}

/// Which record store backs the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Sqlite,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            other => bail!("Unknown store backend '{}' (expected sqlite or memory)", other),
        }
    }
}

/// Record store configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Storage backend: "sqlite" or "memory"
    pub backend: StoreBackend,
    /// SQLite database path (if using sqlite backend)
    pub sqlite_path: String,
}

/// Catalog engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Compare-and-set attempts for a score change before giving up
    pub score_update_attempts: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            score_update_attempts: 5,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let score_update_attempts: u32 = var("SCORE_UPDATE_ATTEMPTS")
            .unwrap_or_else(|| "5".to_string())
            .parse()
            .context("SCORE_UPDATE_ATTEMPTS must be a positive integer")?;
        if score_update_attempts == 0 {
            bail!("SCORE_UPDATE_ATTEMPTS must be at least 1");
        }

        Ok(Self {
            server_host: var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: var("SERVER_PORT")
                .or_else(|| var("PORT"))
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,

            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),

            store: StoreConfig {
                backend: var("STORE_BACKEND")
                    .unwrap_or_else(|| "sqlite".to_string())
                    .parse()?,
                sqlite_path: var("SQLITE_PATH").unwrap_or_else(|| "movieflix.db".to_string()),
            },

            catalog: CatalogConfig {
                score_update_attempts,
            },
        })
    }

    /// Socket address string the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert!(config.cors_allowed_origins.is_empty());
        assert_eq!(config.store.backend, StoreBackend::Sqlite);
        assert_eq!(config.store.sqlite_path, "movieflix.db");
        assert_eq!(config.catalog, CatalogConfig::default());
    }

    #[test]
    fn port_falls_back_to_port_variable() {
        let config = config_from(&[("PORT", "8080")]).unwrap();
        assert_eq!(config.server_port, 8080);

        let config = config_from(&[("PORT", "8080"), ("SERVER_PORT", "9090")]).unwrap();
        assert_eq!(config.server_port, 9090);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = config_from(&[
            ("STORE_BACKEND", "Memory"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
            ("SCORE_UPDATE_ATTEMPTS", "2"),
        ])
        .unwrap();
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert_eq!(config.catalog.score_update_attempts, 2);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(config_from(&[("SERVER_PORT", "not-a-port")]).is_err());
        assert!(config_from(&[("STORE_BACKEND", "postgres")]).is_err());
        assert!(config_from(&[("SCORE_UPDATE_ATTEMPTS", "0")]).is_err());
    }
}
