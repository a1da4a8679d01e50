//! Seeded user dataset
//!
//! The dashboard has no backing store: these records are the whole
//! population, declared once and served read-only for the life of the process.

use crate::types::UserRecord;

/// Build the seeded records in declaration order
pub fn seed_users() -> Vec<UserRecord> {
    vec![
        UserRecord::new("Foo Bar1", "2020-10-01", "2021-10-01", "2025-01-04", true),
        UserRecord::new("Foo1 Bar1", "2019-09-20", "2019-09-22", "2025-02-08", false),
        UserRecord::new("Foo2 Bar2", "2022-02-03", "2022-02-03", "2025-04-12", false),
        UserRecord::new("Foo3 Bar3", "2023-03-07", "2025-03-10", "2022-01-03", true),
        UserRecord::new("Foo Bar4", "2018-04-08", "2020-04-12", "2022-10-04", false),
        UserRecord::new("Foo New", "2025-04-08", "2025-04-12", "2025-05-04", false),
    ]
}
