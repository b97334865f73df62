//! Connection opener with a bounded, fixed-delay retry loop

use crate::error::{Result, StorageError};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::ConnectOptions;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Parameters for a single MySQL connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            host: "mysql-service".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: "password123".to_string(),
            database: "myapp".to_string(),
        }
    }
}

impl ConnectionSettings {
    fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

/// How often and how far apart connection attempts are made
///
/// The delay is constant: no exponential growth and no jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Zero behaves like one.
    pub max_attempts: u32,

    /// Pause between a failed attempt and the next one
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            delay: Duration::from_secs(2),
        }
    }
}

/// Run `operation` until it succeeds or the policy's attempts are used up
///
/// The operation receives the 1-based attempt number. There is no sleep
/// after the last failed attempt; its error is returned as-is.
pub async fn retry<T, E, F, Fut>(policy: &RetryPolicy, mut operation: F) -> std::result::Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
    E: Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < max_attempts => {
                tracing::warn!(
                    "Attempt {}/{} failed: {}; retrying in {:?}",
                    attempt,
                    max_attempts,
                    err,
                    policy.delay
                );
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
            Err(err) => {
                tracing::error!("Giving up after {} attempts: {}", attempt, err);
                return Err(err);
            }
        }
    }
}

/// Open a new MySQL connection, retrying according to `policy`
pub async fn open_connection(
    settings: &ConnectionSettings,
    policy: &RetryPolicy,
) -> Result<MySqlConnection> {
    let options = settings.connect_options();

    let conn = retry(policy, |attempt| {
        tracing::debug!(
            "Connecting to {}:{}/{} (attempt {})",
            settings.host,
            settings.port,
            settings.database,
            attempt
        );
        options.connect()
    })
    .await
    .map_err(StorageError::Connection)?;

    Ok(conn)
}
