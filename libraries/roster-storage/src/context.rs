//! `UserStore` backed by one-shot MySQL connections

use crate::connection::{open_connection, ConnectionSettings, RetryPolicy};
use crate::error::StorageError;
use crate::users;
use async_trait::async_trait;
use roster_core::{NewUser, Result, User, UserId, UserStore};
use sqlx::mysql::MySqlConnection;
use sqlx::Connection;

/// MySQL-backed user store
///
/// Opens a fresh connection for every call and closes it once the statement
/// has run. If the statement fails, the connection is dropped without a
/// graceful close.
#[derive(Debug, Clone)]
pub struct MySqlUserStore {
    settings: ConnectionSettings,
    retry: RetryPolicy,
}

impl MySqlUserStore {
    pub fn new(settings: ConnectionSettings, retry: RetryPolicy) -> Self {
        Self { settings, retry }
    }

    pub fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }

    async fn connect(&self) -> std::result::Result<MySqlConnection, StorageError> {
        open_connection(&self.settings, &self.retry).await
    }
}

async fn close(conn: MySqlConnection) -> std::result::Result<(), StorageError> {
    conn.close().await.map_err(StorageError::Connection)
}

#[async_trait]
impl UserStore for MySqlUserStore {
    async fn list_users(&self) -> Result<Vec<User>> {
        let mut conn = self.connect().await?;
        let users = users::get_all(&mut conn).await?;
        close(conn).await?;
        Ok(users)
    }

    async fn create_user(&self, user: NewUser) -> Result<UserId> {
        let mut conn = self.connect().await?;
        let id = users::create(&mut conn, &user).await?;
        close(conn).await?;

        tracing::info!("Created user {}", id);
        Ok(id)
    }
}
