use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("Invalid Credentials")]
    InvalidCredentials,

    #[error("{0}")]
    Conflict(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid Token")]
    InvalidToken,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        // Internal failures are logged with full detail but surfaced to the
        // caller as a single generic message.
        let message = match self {
            AppError::Database(err) => {
                tracing::error!(error = %err, "database failure");
                "Internal server error".to_string()
            }
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "internal failure");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(status).json(json!({
            "status": status.as_u16(),
            "data": {
                "message": message,
                "payload": null,
            }
        }))
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(_err: jsonwebtoken::errors::Error) -> Self {
        AppError::InvalidToken
    }
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(err: argon2::password_hash::Error) -> Self {
        AppError::Internal(format!("password hash error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_error_kinds() {
        assert_eq!(
            AppError::NotFound("Event not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Conflict("Email already in use".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Validation("Invalid date or time format".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn internal_detail_is_not_leaked() {
        let response = AppError::Internal("connection pool exhausted".into()).error_response();
        let body = actix_web::body::to_bytes(response.into_body())
            .await
            .expect("read body");
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"]["message"], "Internal server error");
        assert_eq!(json["data"]["payload"], serde_json::Value::Null);
        assert_eq!(json["status"], 500);
    }

    #[actix_web::test]
    async fn not_found_keeps_its_message() {
        let response = AppError::NotFound("Event not found".into()).error_response();
        let body = actix_web::body::to_bytes(response.into_body())
            .await
            .expect("read body");
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"]["message"], "Event not found");
        assert_eq!(json["status"], 404);
    }
}
