/// Common test utilities and fixtures
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use roster_core::{NewUser, Result, RosterError, User, UserId, UserStore};
use roster_server::{api, state::AppState};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the users table
///
/// Assigns ids the way AUTO_INCREMENT does and counts every call, so tests
/// can assert that rejected requests never reach the store.
#[derive(Default)]
pub struct MemoryUserStore {
    rows: Mutex<Vec<User>>,
    calls: AtomicUsize,
}

impl MemoryUserStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list_users(&self) -> Result<Vec<User>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let mut users = self.rows.lock().unwrap().clone();
        users.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(users)
    }

    async fn create_user(&self, user: NewUser) -> Result<UserId> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        rows.push(User {
            id,
            name: user.name().to_string(),
            email: user.email().to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
                + chrono::Duration::seconds(id),
        });
        Ok(id)
    }
}

/// Store whose every call fails with a fixed backend error
pub struct FailingUserStore {
    pub error: RosterError,
}

#[async_trait]
impl UserStore for FailingUserStore {
    async fn list_users(&self) -> Result<Vec<User>> {
        Err(self.error.clone())
    }

    async fn create_user(&self, _user: NewUser) -> Result<UserId> {
        Err(self.error.clone())
    }
}

/// Build the real router around `store`
pub fn create_test_app(store: Arc<dyn UserStore>) -> axum::Router {
    api::router(AppState::new(store))
}

/// Test request bodies
pub mod fixtures {
    pub const ANN: &str = r#"{"name": "Ann", "email": "ann@x.com"}"#;
    pub const BOB: &str = r#"{"name": "Bob", "email": "bob@x.com"}"#;
    pub const REFUSED: &str = "error communicating with database: Connection refused (os error 111)";
}
