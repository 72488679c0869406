use crate::errors::ApiError;
use crate::handlers;
use crate::middleware::log_request;
use crate::state::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use dns_lookup_domain::DomainError;
use std::path::PathBuf;
use tower_http::services::ServeDir;
use tracing::warn;

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/dns/lookup",
            post(handlers::perform_lookup).options(handlers::lookup_preflight),
        )
        .route("/dns/resolvers", get(handlers::list_resolvers))
        .route("/health", get(handlers::health_check))
        .with_state(state)
}

/// Full application: the API under `/api`, static assets for every other
/// path, and request logging around both.
///
/// Without a usable asset directory every non-API path answers 500.
pub fn create_app(state: AppState, static_dir: Option<PathBuf>) -> Router {
    let api = Router::new().nest("/api", create_api_routes(state));

    let app = match static_dir.filter(|dir| dir.is_dir()) {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => {
            warn!("Static asset directory not configured");
            api.fallback(assets_not_configured)
        }
    };

    app.layer(middleware::from_fn(log_request))
}

async fn assets_not_configured() -> ApiError {
    ApiError(DomainError::AssetsNotConfigured)
}
