/// Server configuration
use crate::error::{Result, ServerError};
use roster_storage::{ConnectionSettings, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Variables read for the database connection, mapped to their config keys
const DATABASE_ENV_OVERRIDES: [(&str, &str); 5] = [
    ("DB_HOST", "database.host"),
    ("DB_PORT", "database.port"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DB_NAME", "database.name"),
];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_database")]
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseSettings {
    #[serde(default = "default_database_host")]
    pub host: String,

    #[serde(default = "default_database_port")]
    pub port: u16,

    #[serde(default = "default_database_user")]
    pub user: String,

    #[serde(default = "default_database_password")]
    pub password: String,

    #[serde(default = "default_database_name")]
    pub name: String,

    /// Total connection attempts per request, including the first
    #[serde(default = "default_connect_attempts")]
    pub connect_attempts: u32,

    /// Fixed pause between failed connection attempts
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,
}

impl DatabaseSettings {
    pub fn connection_settings(&self) -> ConnectionSettings {
        ConnectionSettings {
            host: self.host.clone(),
            port: self.port,
            user: self.user.clone(),
            password: self.password.clone(),
            database: self.name.clone(),
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.connect_attempts,
            delay: Duration::from_secs(self.retry_delay_secs),
        }
    }
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// Without an explicit path, `config.toml` in the working directory is
    /// used if it exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Load configuration, resolving the `DB_*` variables through `lookup`
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = config::Config::builder();

        // Load from config file if it exists
        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables (e.g. ROSTER_SERVER__PORT)
        settings = settings.add_source(
            config::Environment::with_prefix("ROSTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // The plain DB_* variables take precedence over everything else
        for (var, key) in DATABASE_ENV_OVERRIDES {
            settings = settings
                .set_override_option(key, lookup(var))
                .map_err(|e| ServerError::Config(e.to_string()))?;
        }

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.database.host.trim().is_empty() {
            return Err(ServerError::Config(
                "Database host is required (set DB_HOST)".to_string(),
            ));
        }

        if self.database.name.trim().is_empty() {
            return Err(ServerError::Config(
                "Database name is required (set DB_NAME)".to_string(),
            ));
        }

        if self.database.connect_attempts == 0 {
            return Err(ServerError::Config(
                "database.connect_attempts must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_database() -> DatabaseSettings {
    DatabaseSettings {
        host: default_database_host(),
        port: default_database_port(),
        user: default_database_user(),
        password: default_database_password(),
        name: default_database_name(),
        connect_attempts: default_connect_attempts(),
        retry_delay_secs: default_retry_delay_secs(),
    }
}

fn default_database_host() -> String {
    ConnectionSettings::default().host
}

fn default_database_port() -> u16 {
    ConnectionSettings::default().port
}

fn default_database_user() -> String {
    ConnectionSettings::default().user
}

fn default_database_password() -> String {
    ConnectionSettings::default().password
}

fn default_database_name() -> String {
    ConnectionSettings::default().database
}

fn default_connect_attempts() -> u32 {
    RetryPolicy::default().max_attempts
}

fn default_retry_delay_secs() -> u64 {
    RetryPolicy::default().delay.as_secs()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            database: default_database(),
        }
    }
}
