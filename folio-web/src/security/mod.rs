pub mod middleware;

pub use middleware::{admin_auth_middleware, AdminToken};
