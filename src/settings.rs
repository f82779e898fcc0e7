use config::{Config, ConfigError, Environment, File};
use dotenv::dotenv;
use serde::Deserialize;
use std::{env, fmt, str::FromStr};

use crate::constants::DEFAULT_FEATURED_LIMIT;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    /// Absent or empty means the service runs on the in-memory fallback.
    #[serde(default)]
    pub database_url: Option<String>,

    /// Endpoint receiving contact notifications; absent disables dispatch.
    #[serde(default)]
    pub notify_webhook_url: Option<String>,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,

    #[serde(default = "default_featured_limit")]
    pub featured_limit: usize,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Studio-API".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_featured_limit() -> usize {
    DEFAULT_FEATURED_LIMIT
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                File::with_name(&format!("config/{}", env_name.to_string().to_lowercase()))
                    .required(false),
            )
            .add_source(Environment::with_prefix("APP").separator("_").ignore_empty(true));

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        // Multi-word keys do not survive the env separator, inject directly.
        if config.database_url.is_none() {
            config.database_url = non_empty_env("APP_DATABASE_URL");
        }
        if config.notify_webhook_url.is_none() {
            config.notify_webhook_url = non_empty_env("APP_NOTIFY_WEBHOOK_URL");
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.featured_limit == 0 {
            errors.push("featured_limit must be at least 1");
        }
        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production");
        }
        if self.is_production() && self.database_url.is_none() {
            errors.push("DATABASE_URL must be set in production");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .flat_map(|origin| origin.split(','))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Connection strings carry credentials, keep them out of logs.
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("database_url", &self.database_url.as_ref().map(|_| "[REDACTED]"))
            .field(
                "notify_webhook_url",
                &self.notify_webhook_url.as_ref().map(|_| "[REDACTED]"),
            )
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("featured_limit", &self.featured_limit)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> AppConfig {
        AppConfig {
            env: AppEnvironment::Testing,
            name: "Studio-API-Test".into(),
            port: 0,
            host: "127.0.0.1".into(),
            worker_count: 1,
            database_url: None,
            notify_webhook_url: None,
            cors_allowed_origins: vec!["*".into()],
            featured_limit: 6,
        }
    }

    #[test]
    fn cors_origins_split_on_commas() {
        let mut config = base_config();
        config.cors_allowed_origins =
            vec!["http://localhost:3000, http://localhost:3001".into(), "".into()];
        assert_eq!(
            config.cors_origins(),
            vec!["http://localhost:3000", "http://localhost:3001"]
        );
    }

    #[test]
    fn production_rejects_wildcard_cors() {
        let mut config = base_config();
        config.env = AppEnvironment::Production;
        config.database_url = Some("postgres://localhost/studio".into());
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_database_url_is_fine_outside_production() {
        let config = base_config();
        assert!(config.validate().is_ok());
    }
}
