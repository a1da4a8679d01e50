//! User Table Core
//!
//! Domain types and the read-only user directory behind the user activity
//! dashboard.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `UserRecord`, one user's account metadata
//! - **Dataset**: the seeded, process-wide list of records
//! - **Directory**: `UserDirectory`, the immutable read model served over HTTP
//! - **Error Handling**: `CoreError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use user_table_core::UserDirectory;
//!
//! let directory = UserDirectory::seeded();
//! let users = directory.list_users();
//!
//! assert_eq!(users.len(), 6);
//! assert_eq!(users[0].name, "Foo Bar1");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod dataset;
pub mod directory;
pub mod error;
pub mod types;

pub use dataset::seed_users;
pub use directory::UserDirectory;
pub use error::{CoreError, Result};
pub use types::{UserRecord, DATE_FORMAT, PASSWORD_STALE_AFTER_DAYS};
