/// Event handlers
use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::error::AppError;
use crate::metrics::EVENTS_CREATED;
use crate::models::envelope::ApiResponse;
use crate::models::CreateEventRequest;
use crate::services::EventService;
use crate::AppState;

use super::bearer_token;

fn parse_event_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest("Invalid event id".to_string()))
}

/// GET /api/v1/events/{id}
pub async fn get_event(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let token = bearer_token(&req).ok_or(AppError::Unauthorized)?;
    let event_id = parse_event_id(&path.into_inner())?;

    let service = EventService::new(state.db.clone(), state.jwt.clone());
    let event = service.get_event(token, event_id).await?;

    Ok(ApiResponse::ok(event).into_response())
}

/// GET /api/v1/public/events/{id}
///
/// Registration view: same read path as `get_event`, no identity involved.
pub async fn get_public_event(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let event_id = parse_event_id(&path.into_inner())?;

    let service = EventService::new(state.db.clone(), state.jwt.clone());
    let event = service.get_public_event(event_id).await?;

    Ok(ApiResponse::ok(event).into_response())
}

/// POST /api/v1/events
pub async fn create_event(
    state: web::Data<AppState>,
    payload: web::Json<CreateEventRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let token = bearer_token(&req).ok_or(AppError::Unauthorized)?;

    let service = EventService::new(state.db.clone(), state.jwt.clone());
    match service.create_event(token, &payload).await {
        Ok(event) => {
            EVENTS_CREATED.with_label_values(&["success"]).inc();
            Ok(ApiResponse::created("Event created successfully", event).into_response())
        }
        Err(err) => {
            EVENTS_CREATED.with_label_values(&["failure"]).inc();
            Err(err)
        }
    }
}
