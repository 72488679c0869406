use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

/// Logs `<METHOD> <path> <status>` once the response is known.
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    info!("{} {} {}", method, path, response.status().as_u16());
    response
}
