use sqlx::PgPool;

use crate::db;
use crate::error::{AppError, Result};
use crate::models::{PublicUser, TokenPayload};
use crate::security::jwt::JwtService;
use crate::security::password;
use crate::validators;

/// Login, register, and logout. Stateless across requests; holds only the
/// pool and the token signer, both injected at construction.
pub struct AuthService {
    db: PgPool,
    jwt: JwtService,
}

impl AuthService {
    pub fn new(db: PgPool, jwt: JwtService) -> Self {
        Self { db, jwt }
    }

    /// Look the user up by email, check the password, issue a token.
    ///
    /// An empty email is not special-cased; it goes through the lookup and
    /// fails as an unknown user.
    pub async fn login(&self, email: &str, pass: &str) -> Result<TokenPayload> {
        if pass.is_empty() {
            return Err(AppError::Validation("Password is required".to_string()));
        }

        let user = db::user_repo::find_by_email(&self.db, email)
            .await?
            .ok_or_else(|| AppError::NotFound("User Not Found".to_string()))?;

        if !password::verify_password(pass, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        let token = self.jwt.issue(user.id)?;

        tracing::info!(user_id = %user.id, "user logged in");
        Ok(TokenPayload { token })
    }

    /// Create a user with a hashed password; returns the sanitized record.
    pub async fn register(&self, email: &str, pass: &str, name: &str) -> Result<PublicUser> {
        if pass.is_empty() {
            return Err(AppError::Validation("Password is required".to_string()));
        }
        if !validators::validate_email(email) {
            return Err(AppError::Validation("Invalid email format".to_string()));
        }

        // Friendly pre-check; the unique constraint in user_repo::create_user
        // remains the authority if a concurrent register wins the race.
        if db::user_repo::find_by_email(&self.db, email).await?.is_some() {
            return Err(AppError::Conflict("Email already in use".to_string()));
        }

        let password_hash = password::hash_password(pass)?;
        let user = db::user_repo::create_user(&self.db, email, &password_hash, name).await?;

        tracing::info!(user_id = %user.id, "user registered");
        Ok(PublicUser::from(user))
    }

    /// Validate the bearer token. Tokens are stateless, so nothing is
    /// revoked; an invalid or expired token is the only failure.
    pub async fn logout(&self, token: &str) -> Result<()> {
        let user_id = self.jwt.verify(token).map_err(|_| AppError::InvalidToken)?;
        tracing::info!(user_id = %user_id, "user logged out");
        Ok(())
    }
}
