/// Business logic services
pub mod auth_service;
pub mod event_service;

pub use auth_service::AuthService;
pub use event_service::EventService;
