/// Shared application state
use user_table_core::UserDirectory;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub users: UserDirectory,
}

impl AppState {
    pub fn new(users: UserDirectory) -> Self {
        Self { users }
    }
}
