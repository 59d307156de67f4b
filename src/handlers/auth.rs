/// Authentication handlers
use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::AppError;
use crate::metrics::AUTH_ATTEMPTS;
use crate::models::envelope::ApiResponse;
use crate::models::{LoginRequest, RegisterRequest};
use crate::services::AuthService;
use crate::AppState;

use super::bearer_token;

/// POST /api/v1/auth/login
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let service = AuthService::new(state.db.clone(), state.jwt.clone());

    match service.login(&payload.email, &payload.password).await {
        Ok(token) => {
            AUTH_ATTEMPTS.with_label_values(&["login", "success"]).inc();
            Ok(ApiResponse::ok(token).into_response())
        }
        Err(err) => {
            AUTH_ATTEMPTS.with_label_values(&["login", "failure"]).inc();
            Err(err)
        }
    }
}

/// POST /api/v1/auth/register
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let service = AuthService::new(state.db.clone(), state.jwt.clone());

    match service
        .register(&payload.email, &payload.password, &payload.name)
        .await
    {
        Ok(user) => {
            AUTH_ATTEMPTS
                .with_label_values(&["register", "success"])
                .inc();
            Ok(ApiResponse::created("User registered successfully", user).into_response())
        }
        Err(err) => {
            AUTH_ATTEMPTS
                .with_label_values(&["register", "failure"])
                .inc();
            Err(err)
        }
    }
}

/// POST /api/v1/auth/logout
pub async fn logout(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let token = bearer_token(&req).ok_or(AppError::InvalidToken)?;

    let service = AuthService::new(state.db.clone(), state.jwt.clone());
    service.logout(token).await?;

    Ok(ApiResponse::<serde_json::Value>::message("Logged out successfully").into_response())
}
