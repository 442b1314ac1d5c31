//! Top-level router composing routes and the middleware chain.
//!
//! # Route Structure
//!
//! - `/api/*` - REST API (Bearer token required)
//!
//! # Middleware
//!
//! Stages are stacked so that later `.layer()` calls wrap earlier ones,
//! giving the fixed outer-to-inner order the chain requires:
//!
//! 1. **Fault containment** (outermost) - panics anywhere below become a
//!    generic 500
//! 2. **Authentication** - may short-circuit with 401; exempts the
//!    documentation path prefix
//! 3. **Request logging** (innermost) - one status line per authenticated
//!    request
//!
//! The chain is applied here, at the top level, rather than on the nested
//! API router, so the auth stage sees full request paths when matching the
//! documentation prefix.

use crate::api;
use crate::api::middleware::{access_log, auth, fault};
use crate::state::AppState;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api::routes::routes())
        .with_state(state.clone())
        .layer(middleware::from_fn(access_log::layer))
        .layer(middleware::from_fn_with_state(state, auth::layer))
        .layer(fault::layer())
}
