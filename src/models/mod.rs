/// Data models and wire DTOs
pub mod envelope;
pub mod event;
pub mod user;

pub use envelope::ApiResponse;
pub use event::{CreateEventRequest, CustomField, CustomFieldInput, Event, EventPayload};
pub use user::{LoginRequest, PublicUser, RegisterRequest, TokenPayload, User};
