/// HTTP request handlers (REST API)
pub mod auth;
pub mod events;

use actix_web::HttpRequest;

pub use auth::{login, logout, register};
pub use events::{create_event, get_event, get_public_event};

/// Extract the bearer token from the Authorization header.
pub(crate) fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Readiness check endpoint
pub async fn readiness_check() -> &'static str {
    "READY"
}
