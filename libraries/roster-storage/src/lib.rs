//! Roster Storage
//!
//! MySQL access layer for the Roster users service.
//!
//! There is no connection pool: every operation opens its own
//! connection through [`open_connection`], which retries a fixed number of
//! times with a fixed delay before giving up.
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_storage::{open_connection, ConnectionSettings, RetryPolicy};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = ConnectionSettings::default();
//! let mut conn = open_connection(&settings, &RetryPolicy::default()).await?;
//!
//! let users = roster_storage::users::get_all(&mut conn).await?;
//! println!("{} users", users.len());
//! # Ok(())
//! # }
//! ```

mod connection;
mod context;
mod error;

pub mod users;

pub use connection::{open_connection, retry, ConnectionSettings, RetryPolicy};
pub use context::MySqlUserStore;
pub use error::{Result, StorageError};
