//! Integration tests for roster-storage against a real MySQL server.
//!
//! A `mysql:8.0` container is started per test; the `users` table is
//! provisioned here because the service itself never creates it.
//!
//! # Requirements
//!
//! - Docker must be installed and running
//! - Tests must be run with `--features testcontainers`
//!
//! Run tests with:
//! ```bash
//! cargo test -p roster-storage --features testcontainers --test database_integration
//! ```

#![cfg(feature = "testcontainers")]

use roster_core::{NewUser, RosterError, UserStore};
use roster_storage::{open_connection, ConnectionSettings, MySqlUserStore, RetryPolicy};
use sqlx::Connection;
use std::time::Duration;
use testcontainers::{
    core::{IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    ContainerAsync, GenericImage, ImageExt,
};

const SCHEMA: &str = "CREATE TABLE users (
    id INT AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// Running MySQL container with a provisioned `users` table
struct TestMySql {
    settings: ConnectionSettings,
    _container: ContainerAsync<GenericImage>,
}

impl TestMySql {
    async fn start() -> Self {
        let container = GenericImage::new("mysql", "8.0")
            .with_exposed_port(3306.tcp())
            .with_wait_for(WaitFor::message_on_stderr(
                "port: 3306  MySQL Community Server",
            ))
            .with_env_var("MYSQL_ROOT_PASSWORD", "password123")
            .with_env_var("MYSQL_DATABASE", "myapp")
            .start()
            .await
            .expect("Failed to start MySQL container");

        let host = container.get_host().await.expect("container host");
        let port = container
            .get_host_port_ipv4(3306)
            .await
            .expect("mapped MySQL port");

        let settings = ConnectionSettings {
            host: host.to_string(),
            port,
            ..ConnectionSettings::default()
        };

        let mut conn = open_connection(&settings, &fast_retry())
            .await
            .expect("Failed to connect to MySQL container");
        sqlx::query(SCHEMA)
            .execute(&mut conn)
            .await
            .expect("Failed to create users table");
        conn.close().await.expect("Failed to close setup connection");

        Self {
            settings,
            _container: container,
        }
    }

    fn store(&self) -> MySqlUserStore {
        MySqlUserStore::new(self.settings.clone(), fast_retry())
    }
}

fn fast_retry() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 10,
        delay: Duration::from_millis(500),
    }
}

#[tokio::test]
async fn test_empty_table_lists_no_users() {
    let db = TestMySql::start().await;

    let users = db.store().list_users().await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_created_users_are_listed_newest_first() {
    let db = TestMySql::start().await;
    let store = db.store();

    let ann = store
        .create_user(NewUser::new("Ann", "ann@x.com").unwrap())
        .await
        .unwrap();
    let bob = store
        .create_user(NewUser::new(" Bob ", "bob@x.com").unwrap())
        .await
        .unwrap();
    assert_eq!(ann, 1);
    assert!(bob > ann);

    let users = store.list_users().await.unwrap();
    let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![bob, ann]);

    assert_eq!(users[0].name, "Bob");
    assert_eq!(users[0].email, "bob@x.com");
    assert_eq!(users[1].name, "Ann");
}

#[tokio::test]
async fn test_duplicate_emails_are_accepted() {
    let db = TestMySql::start().await;
    let store = db.store();

    store
        .create_user(NewUser::new("Ann", "same@x.com").unwrap())
        .await
        .unwrap();
    store
        .create_user(NewUser::new("Ann Again", "same@x.com").unwrap())
        .await
        .unwrap();

    assert_eq!(store.list_users().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_concurrent_lists_use_independent_connections() {
    let db = TestMySql::start().await;
    let store = db.store();
    store
        .create_user(NewUser::new("Ann", "ann@x.com").unwrap())
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let store = store.clone();
        handles.push(tokio::spawn(async move { store.list_users().await }));
    }

    for handle in handles {
        let users = handle.await.unwrap().unwrap();
        assert_eq!(users.len(), 1);
    }
}

#[tokio::test]
async fn test_missing_table_is_a_query_error() {
    let db = TestMySql::start().await;

    let mut settings = db.settings.clone();
    settings.database = "mysql".to_string();
    let store = MySqlUserStore::new(settings, fast_retry());

    let err = store.list_users().await.unwrap_err();
    assert!(matches!(err, RosterError::Query(_)));
    assert!(err.to_string().contains("users"));
}
