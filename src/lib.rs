//! # TechHive User Directory
//!
//! A minimal in-memory user management REST API built with Axum.
//!
//! ## Architecture
//!
//! - **Domain** ([`domain`]) - The `User` entity and the concurrency-safe
//!   in-memory store that owns all records
//! - **Validation** ([`validation`]) - Pure field-level checks for create
//!   and update requests
//! - **API** ([`api`]) - REST handlers, DTOs, and the middleware chain
//!   (fault containment, token authentication, request logging)
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; a built-in development token is used when unset
//! export API_TOKEN="your-shared-secret"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod state;
pub mod validation;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::store::{StoreError, UserStore};
    pub use crate::domain::user::{User, UserPatch};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
