//! User queries
//!
//! Each function runs exactly one statement on a caller-owned connection.
//! Single statements are auto-committed by MySQL, so no explicit
//! transaction is opened.

use crate::error::{Result, StorageError};
use chrono::{DateTime, Utc};
use roster_core::types::{NewUser, User, UserId};
use sqlx::mysql::MySqlConnection;

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

/// Get all users, newest first
pub async fn get_all(conn: &mut MySqlConnection) -> Result<Vec<User>> {
    let rows = sqlx::query_as::<_, UserRow>(
        "SELECT id, name, email, created_at FROM users ORDER BY id DESC",
    )
    .fetch_all(&mut *conn)
    .await
    .map_err(StorageError::Query)?;

    Ok(rows.into_iter().map(User::from).collect())
}

/// Insert a user and return the auto-increment id MySQL assigned
pub async fn create(conn: &mut MySqlConnection, user: &NewUser) -> Result<UserId> {
    let result = sqlx::query("INSERT INTO users (name, email) VALUES (?, ?)")
        .bind(user.name())
        .bind(user.email())
        .execute(&mut *conn)
        .await
        .map_err(StorageError::Query)?;

    Ok(result.last_insert_id() as UserId)
}
