//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Fallback header consulted when no `Authorization: Bearer` header is set.
const API_TOKEN_HEADER: &str = "x-api-token";

/// Authenticates requests against the configured shared-secret token.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// or, as a fallback:
///
/// ```text
/// X-API-TOKEN: <token>
/// ```
///
/// # Authentication Flow
///
/// 1. Requests under the documentation path prefix pass through unchecked
/// 2. Extract the token from `Authorization`, falling back to `X-API-TOKEN`
/// 3. Compare case-sensitively against the configured token
/// 4. Continue to the next stage, or short-circuit with 401
///
/// # Errors
///
/// Writes `401 Unauthorized` with a generic JSON body if the token is
/// missing or does not match. The denial is logged here (method and path at
/// warn level) because the request never reaches the access-log stage.
pub async fn layer(State(st): State<AppState>, req: Request, next: Next) -> Response {
    if req.uri().path().starts_with(st.docs_path_prefix.as_str()) {
        return next.run(req).await;
    }

    let (mut parts, body) = req.into_parts();

    let token = match AuthBearer::from_request_parts(&mut parts, &()).await {
        Ok(AuthBearer(token)) => Some(token),
        Err(_) => parts
            .headers
            .get(API_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    };

    let req = Request::from_parts(parts, body);

    match token {
        Some(token) if token == *st.api_token => next.run(req).await,
        _ => {
            tracing::warn!(
                method = %req.method(),
                path = %req.uri().path(),
                "Rejected request with missing or invalid API token"
            );
            AppError::Unauthorized.into_response()
        }
    }
}
