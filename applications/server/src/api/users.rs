/// User listing API routes
use crate::{api::response::json_response, error::Result, state::AppState};
use axum::{extract::State, response::Response};

/// GET /api/users
/// List every user record, in declaration order
pub async fn list_users(State(app_state): State<AppState>) -> Result<Response> {
    let users = app_state.users.list_users();
    tracing::debug!("Listing {} users", users.len());

    json_response(users)
}
