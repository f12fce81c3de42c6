use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::http::HeaderValue;

pub const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:3000,http://localhost:8081,http://localhost:5173";
pub const DEFAULT_CALLBACK_URL: &str = "http://localhost:5173/callback";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub seed_csv_path: PathBuf,
    pub allowed_origins: AllowedOrigins,
    pub auth: AuthConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key/value source. Unset and blank
    /// values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: var("PORT")
                .map(|port| port.trim().parse::<u16>())
                .transpose()
                .context("PORT must be a number")?
                .unwrap_or(8000),
            database_url: var("DATABASE_URL")
                .unwrap_or_else(|| "sqlite://fitness.db?mode=rwc".to_string()),
            seed_csv_path: var("SEED_CSV_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/workouts.csv")),
            allowed_origins: AllowedOrigins::from_comma_separated(
                &var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string()),
            ),
            auth: AuthConfig {
                domain: var("AUTH0_DOMAIN"),
                client_id: var("AUTH0_CLIENT_ID"),
                client_secret: var("AUTH0_CLIENT_SECRET"),
                callback_url: var("AUTH0_CALLBACK_URL")
                    .unwrap_or_else(|| DEFAULT_CALLBACK_URL.to_string()),
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Identity provider settings. Loaded as-is; completeness is checked by the
/// token exchange service when it is built.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub domain: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub callback_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            domain: None,
            client_id: None,
            client_secret: None,
            callback_url: DEFAULT_CALLBACK_URL.to_string(),
        }
    }
}

impl AuthConfig {
    pub fn missing_variables(&self) -> Vec<&'static str> {
        [
            ("AUTH0_DOMAIN", &self.domain),
            ("AUTH0_CLIENT_ID", &self.client_id),
            ("AUTH0_CLIENT_SECRET", &self.client_secret),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Origins allowed to make cross-origin requests
#[derive(Debug, Clone, Default)]
pub struct AllowedOrigins {
    origins: Vec<HeaderValue>,
}

impl AllowedOrigins {
    pub fn from_comma_separated(origins_str: &str) -> Self {
        let origins = origins_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();

        Self { origins }
    }

    pub fn as_slice(&self) -> &[HeaderValue] {
        &self.origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(config.database_url, "sqlite://fitness.db?mode=rwc");
        assert_eq!(config.seed_csv_path, PathBuf::from("data/workouts.csv"));
        assert_eq!(config.allowed_origins.as_slice().len(), 3);
        assert_eq!(config.auth.callback_url, DEFAULT_CALLBACK_URL);
        assert_eq!(
            config.auth.missing_variables(),
            vec!["AUTH0_DOMAIN", "AUTH0_CLIENT_ID", "AUTH0_CLIENT_SECRET"]
        );
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("CORS_ALLOWED_ORIGINS", "https://app.example.com, ,https://admin.example.com"),
            ("AUTH0_DOMAIN", "tenant.auth0.com"),
            ("AUTH0_CLIENT_ID", "client"),
            ("AUTH0_CLIENT_SECRET", "  "),
        ])
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.allowed_origins.as_slice().len(), 2);
        assert_eq!(config.auth.missing_variables(), vec!["AUTH0_CLIENT_SECRET"]);
    }

    #[test]
    fn test_invalid_port() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
    }
}
