/// JWT issuance and verification
///
/// Tokens are HS256-signed bearer credentials carrying a single identity
/// claim (`sub` = user id) with a fixed one-hour lifetime. Expiry is the only
/// invalidation mechanism; there is no revocation list.
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, Result};

/// Token lifetime: 1 hour
const TOKEN_TTL_SECONDS: i64 = 60 * 60;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID as UUID string)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Signs and verifies tokens with a shared secret. Constructed once at
/// startup from configuration and cloned into the application state.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a token for the given user, valid for one hour.
    pub fn issue(&self, user_id: Uuid) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: now.timestamp() + TOKEN_TTL_SECONDS,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal("Failed to sign token".to_string()))
    }

    /// Verify a token and return the embedded user id.
    ///
    /// Fails with `InvalidToken` when the token is malformed, mis-signed, or
    /// expired.
    pub fn verify(&self, token: &str) -> Result<Uuid> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &Validation::default())?;

        Uuid::parse_str(&token_data.claims.sub).map_err(|_| AppError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new("test-secret-key")
    }

    #[test]
    fn issue_then_verify_round_trips_user_id() {
        let jwt = service();
        let user_id = Uuid::new_v4();

        let token = jwt.issue(user_id).unwrap();
        let decoded = jwt.verify(&token).unwrap();

        assert_eq!(decoded, user_id);
    }

    #[test]
    fn expired_token_is_rejected() {
        // Encode claims whose exp already elapsed (beyond the default leeway)
        let jwt = service();
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret-key"),
        )
        .unwrap();

        let result = jwt.verify(&token);
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = JwtService::new("other-secret")
            .issue(Uuid::new_v4())
            .unwrap();
        assert!(matches!(service().verify(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn malformed_token_is_rejected() {
        assert!(matches!(
            service().verify("not.a.jwt"),
            Err(AppError::InvalidToken)
        ));
        assert!(matches!(service().verify(""), Err(AppError::InvalidToken)));
    }

    #[test]
    fn non_uuid_subject_is_rejected() {
        let jwt = service();
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "42".to_string(),
            iat: now,
            exp: now + 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret-key"),
        )
        .unwrap();

        assert!(matches!(jwt.verify(&token), Err(AppError::InvalidToken)));
    }
}
