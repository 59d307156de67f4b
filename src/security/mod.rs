/// Security module
/// Provides password hashing and JWT issuance/verification
pub mod jwt;
pub mod password;

pub use jwt::JwtService;
pub use password::{hash_password, verify_password};
