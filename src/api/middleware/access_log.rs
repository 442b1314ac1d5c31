//! Request logging middleware.

use axum::{extract::Request, middleware::Next, response::Response};

/// Logs one status line per dispatched request.
///
/// Emits `HTTP <method> <path> => <status>` at info level after the handler
/// completes, plus a debug line before dispatch. Sits innermost in the
/// chain, so denied requests never reach it.
pub async fn layer(req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    tracing::debug!(%method, %path, "Dispatching request");

    let response = next.run(req).await;

    tracing::info!(
        "HTTP {method} {path} => {status}",
        status = response.status().as_u16(),
    );

    response
}
