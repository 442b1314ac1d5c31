//! API route configuration.
//!
//! All routes nest under `/api` and sit behind the middleware chain
//! composed in [`crate::routes`].

use crate::api::handlers::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler, throw_handler,
    update_user_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

/// The user CRUD routes plus the deliberate-fault endpoint.
///
/// # Endpoints
///
/// - `GET    /users`      - List all users, sorted by ID
/// - `POST   /users`      - Create a user
/// - `GET    /users/{id}` - Fetch a user
/// - `PUT    /users/{id}` - Partially update a user
/// - `DELETE /users/{id}` - Delete a user
/// - `GET    /test/throw` - Always faults; proves the containment stage
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/{id}",
            put(update_user_handler)
                .get(get_user_handler)
                .delete(delete_user_handler),
        )
        .route("/test/throw", get(throw_handler))
}
