//! Roster Core
//!
//! Backend-agnostic types, traits, and error handling for the Roster users service.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User` (a stored row) and `NewUser` (validated input)
//! - **Core Traits**: `UserStore`, the seam between HTTP handlers and the database
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::{NewUser, RosterError};
//!
//! let user = NewUser::new("  Ann ", "ann@x.com").unwrap();
//! assert_eq!(user.name(), "Ann");
//!
//! let err = NewUser::new("", "a@b.com").unwrap_err();
//! assert!(matches!(err, RosterError::InvalidInput(_)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use storage::UserStore;
pub use types::{NewUser, User, UserId};
