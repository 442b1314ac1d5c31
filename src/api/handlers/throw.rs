//! Handler that fails on purpose.

use axum::response::Response;

/// Always panics.
///
/// # Endpoint
///
/// `GET /api/test/throw`
///
/// Exists to exercise the fault-containment stage: the panic must surface to
/// the client as a generic 500 body while the detail is logged server-side.
pub async fn throw_handler() -> Response {
    panic!("Deliberate test fault from GET /api/test/throw");
}
