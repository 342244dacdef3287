pub mod app_state;
pub mod error;
pub mod handlers;
pub mod security;

pub use app_state::AppState;
pub use error::ApiError;
pub use handlers::*;
pub use security::{admin_auth_middleware, AdminToken};
