//! Handlers for the user CRUD endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::api::dto::users::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::domain::store::StoreError;
use crate::domain::user::User;
use crate::error::AppError;
use crate::state::AppState;
use crate::validation;

/// Lists all users, sorted by ascending ID.
///
/// # Endpoint
///
/// `GET /api/users`
pub async fn list_users_handler(State(state): State<AppState>) -> Json<Vec<UserResponse>> {
    let users = state
        .store
        .list()
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Json(users)
}

/// Returns a single user by ID.
///
/// # Endpoint
///
/// `GET /api/users/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no user has this ID.
pub async fn get_user_handler(
    Path(id): Path<u64>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    state
        .store
        .get(id)
        .map(|user| Json(UserResponse::from(user)))
        .ok_or_else(|| user_not_found(id))
}

/// Creates a new user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Request Body
///
/// ```json
/// {
///   "firstName": "Alice",
///   "lastName": "Johnson",
///   "email": "alice.johnson@techhive.io",
///   "department": "Engineering",   // optional
///   "title": "Lead Developer",     // optional
///   "isActive": true               // optional, defaults to true
/// }
/// ```
///
/// String fields are trimmed before storage. On success the response carries
/// a `Location` header referencing the new resource.
///
/// # Errors
///
/// Returns 400 Bad Request with field-keyed messages if validation fails.
/// The store is not touched on validation failure.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let errors = validation::validate_create(&payload);
    if !errors.is_empty() {
        return Err(AppError::validation(errors));
    }

    // Validation guarantees the required fields are present and non-blank.
    let user = User::new(
        payload.first_name.as_deref().unwrap_or_default(),
        payload.last_name.as_deref().unwrap_or_default(),
        payload.email.as_deref().unwrap_or_default(),
        payload.department.as_deref(),
        payload.title.as_deref(),
        payload.is_active.unwrap_or(true),
    );

    let user = state
        .store
        .insert(user)
        .map_err(|e| AppError::internal(e.to_string()))?;

    let location = format!("/api/users/{}", user.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserResponse::from(user)),
    ))
}

/// Partially updates a user.
///
/// # Endpoint
///
/// `PUT /api/users/{id}`
///
/// # Request Body
///
/// All fields are optional. Blank `firstName` / `lastName` / `email` values
/// are ignored rather than clearing the stored value; a provided
/// `department` / `title` always overrides, with an empty string clearing
/// the field; a provided `isActive` always overrides.
///
/// # Errors
///
/// Returns 404 Not Found if no user has this ID, regardless of body
/// contents. Returns 400 Bad Request if a non-blank email fails the format
/// check.
pub async fn update_user_handler(
    Path(id): Path<u64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    if state.store.get(id).is_none() {
        return Err(user_not_found(id));
    }

    let errors = validation::validate_update(&payload);
    if !errors.is_empty() {
        return Err(AppError::validation(errors));
    }

    state
        .store
        .update(id, payload.into())
        .map(|user| Json(UserResponse::from(user)))
        .map_err(|e| match e {
            StoreError::NotFound(id) => user_not_found(id),
            other => AppError::internal(other.to_string()),
        })
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /api/users/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no user has this ID, including repeat deletes
/// of an already-removed ID.
pub async fn delete_user_handler(
    Path(id): Path<u64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state
        .store
        .delete(id)
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(|_| user_not_found(id))
}

fn user_not_found(id: u64) -> AppError {
    AppError::not_found(format!("User with ID {id} not found."))
}
