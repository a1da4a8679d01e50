//! Read-only user directory
//!
//! `UserDirectory` is the `ListUsers` operation: an immutable, shared view
//! over a fixed record list. Clones share one allocation, so handing a copy to
//! every request task needs no locking.

use crate::{dataset::seed_users, error::Result, types::UserRecord};
use std::sync::Arc;

/// Immutable, cheaply clonable list of user records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDirectory {
    users: Arc<[UserRecord]>,
}

impl UserDirectory {
    /// Create a directory over the given records, keeping their order
    pub fn new(users: impl Into<Vec<UserRecord>>) -> Self {
        let users: Vec<UserRecord> = users.into();
        Self {
            users: users.into(),
        }
    }

    /// Create a directory over the seeded dataset
    pub fn seeded() -> Self {
        Self::new(seed_users())
    }

    /// All records, in declaration order
    ///
    /// Pure and deterministic: every call returns the same slice.
    pub fn list_users(&self) -> &[UserRecord] {
        &self.users
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// True when the directory holds no records
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Check every record's date fields, stopping at the first bad one
    pub fn validate_dates(&self) -> Result<()> {
        self.users.iter().try_for_each(UserRecord::validate_dates)
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}
