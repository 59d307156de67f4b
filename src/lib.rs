/// Gatherly Server Library
///
/// Event management backend: authentication plus event CRUD with nested
/// custom registration fields.
///
/// ## Modules
///
/// - `config`: Service configuration
/// - `db`: Database repositories (users, events)
/// - `error`: Error types
/// - `handlers`: HTTP request handlers (REST API)
/// - `models`: Data models and wire DTOs
/// - `security`: Password hashing and JWT issuance/verification
/// - `services`: Business logic (auth, events)
/// - `validators`: Input validation
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod routes;
pub mod security;
pub mod services;
pub mod telemetry;
pub mod validators;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{CustomField, Event, User};

use crate::security::jwt::JwtService;

/// Shared application state, constructed once at startup and injected into
/// every handler. Repositories take the pool explicitly; there is no global
/// database client.
#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub jwt: JwtService,
}
