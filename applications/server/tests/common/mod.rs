/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{HeaderName, Method, Request, Response},
    Router,
};
use tower::util::ServiceExt;
use user_table_server::{api, config::ServerConfig, state::AppState};
use user_table_core::UserDirectory;

/// Router over the seeded dataset with default configuration
pub fn create_test_app() -> Router {
    create_test_app_with(ServerConfig::default())
}

pub fn create_test_app_with(config: ServerConfig) -> Router {
    api::create_router(AppState::new(UserDirectory::seeded()), &config)
}

pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    send_with_headers(app, method, uri, &[]).await
}

pub async fn send_with_headers(
    app: Router,
    method: Method,
    uri: &str,
    headers: &[(HeaderName, &str)],
) -> Response<Body> {
    let mut request = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        request = request.header(name, *value);
    }
    let request = request.body(Body::empty()).unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// True for strings shaped like `YYYY-MM-DD`
pub fn is_iso_date(value: &str) -> bool {
    value.len() == 10
        && value.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        })
}
