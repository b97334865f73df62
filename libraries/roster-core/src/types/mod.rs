//! Domain types for Roster

mod user;

pub use user::{NewUser, User, UserId, REQUIRED_FIELDS_MESSAGE};
