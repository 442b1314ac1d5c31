//! HTTP request handlers for API endpoints.

pub mod throw;
pub mod users;

pub use throw::throw_handler;
pub use users::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};
