/// Buffered JSON responses
use crate::error::Result;
use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Serialize `value` fully into memory, then build a `200` JSON response
///
/// No status or header is committed until encoding has succeeded, so an
/// encoding failure becomes a clean `500` instead of a truncated body.
pub fn json_response<T>(value: &T) -> Result<Response>
where
    T: Serialize + ?Sized,
{
    let body = serde_json::to_vec(value)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
