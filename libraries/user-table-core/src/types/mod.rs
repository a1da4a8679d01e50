/// Core domain types
mod user_record;

pub use user_record::{UserRecord, DATE_FORMAT, PASSWORD_STALE_AFTER_DAYS};
