/// API route modules
pub mod health;
pub mod response;
pub mod users;

use crate::{config::ServerConfig, error::ServerError, state::AppState};
use axum::{extract::OriginalUri, routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
///
/// Everything under `/api` is answered by the API routes or a JSON 404; the
/// optional web UI only ever sees non-API paths.
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health::health))
        .route("/users", get(users::list_users))
        .fallback(api_not_found);

    let mut router = Router::new().nest("/api", api_routes);

    // Static file serving for web UI (SPA with fallback to index.html)
    if let Some(web_dir) = &config.web.dir {
        let index = ServeFile::new(web_dir.join("index.html"));
        router = router.fallback_service(ServeDir::new(web_dir).fallback(index));
    }

    router = router.layer(
        TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default().include_headers(true)),
    );

    if config.server.cors_permissive {
        router = router.layer(CorsLayer::permissive());
    }

    router.with_state(app_state)
}

async fn api_not_found(OriginalUri(uri): OriginalUri) -> ServerError {
    ServerError::NotFound(uri.path().to_string())
}
