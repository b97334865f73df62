//! Storage trait for the users resource

use crate::error::Result;
use crate::types::{NewUser, User, UserId};
use async_trait::async_trait;

/// Access to the persisted users table
///
/// Implementations own their connection handling. The MySQL backend opens
/// a fresh connection for every call and never shares it between calls.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get all users, newest first (descending by id)
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Insert a user and return the id assigned by the backend
    async fn create_user(&self, user: NewUser) -> Result<UserId>;
}
