use std::path::Path;

use serde::{Deserialize, Serialize};

// ============================================================================
// Application Configuration
// ============================================================================
//
// Loaded from an optional TOML file, then overridden by environment:
// - APP_DATABASE_URL
// - APP_LOG_FILTER
//
// RUST_LOG still takes precedence over the configured log filter when the
// subscriber is built.
//
// ============================================================================

pub const DATABASE_URL_ENV: &str = "APP_DATABASE_URL";
pub const LOG_FILTER_ENV: &str = "APP_LOG_FILTER";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// sqlx connection string, e.g. `sqlite::memory:` or `sqlite://app.db?mode=rwc`
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when RUST_LOG is not set
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info,ddd_events=debug".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `path` (if given and present), then apply
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) if path.exists() => {
                let raw = std::fs::read_to_string(path)?;
                let config = Self::from_toml(&raw)?;
                tracing::debug!(path = %path.display(), "Loaded configuration file");
                config
            }
            _ => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Apply overrides from a key lookup (the process environment in `load`)
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(DATABASE_URL_ENV) {
            self.database.url = url;
        }
        if let Some(filter) = lookup(LOG_FILTER_ENV) {
            self.logging.filter = filter;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.database.max_connections, 1);
        assert_eq!(config.logging.filter, "info,ddd_events=debug");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [database]
            url = "sqlite://orders.db?mode=rwc"
            "#,
        )
        .unwrap();

        assert_eq!(config.database.url, "sqlite://orders.db?mode=rwc");
        assert_eq!(config.database.max_connections, 1);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(AppConfig::from_toml("[database\nurl = 1").is_err());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let mut config = AppConfig::from_toml(
            r#"
            [logging]
            filter = "warn"
            "#,
        )
        .unwrap();

        config.apply_overrides(|key| match key {
            LOG_FILTER_ENV => Some("trace".to_string()),
            _ => None,
        });

        assert_eq!(config.logging.filter, "trace");
        assert_eq!(config.database.url, "sqlite::memory:");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load(Some(Path::new("/nonexistent/app.toml"))).unwrap();
        assert_eq!(config.database.max_connections, 1);
    }
}
