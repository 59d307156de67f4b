use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::db::event_repo::NewEvent;
use crate::error::{AppError, Result};
use crate::models::{CreateEventRequest, EventPayload};
use crate::security::jwt::JwtService;
use crate::validators;

/// Event reads and creation.
pub struct EventService {
    db: PgPool,
    jwt: JwtService,
}

impl EventService {
    pub fn new(db: PgPool, jwt: JwtService) -> Self {
        Self { db, jwt }
    }

    /// Fetch an event for an authenticated caller.
    ///
    /// The token only asserts identity; there is no ownership check on reads.
    pub async fn get_event(&self, token: &str, event_id: Uuid) -> Result<EventPayload> {
        self.jwt.verify(token).map_err(|_| AppError::Unauthorized)?;
        self.load_event(event_id).await
    }

    /// Fetch an event without any identity involved (public registration view).
    pub async fn get_public_event(&self, event_id: Uuid) -> Result<EventPayload> {
        self.load_event(event_id).await
    }

    /// Create an event owned by the token's user, with its custom fields
    /// inserted atomically alongside it.
    pub async fn create_event(
        &self,
        token: &str,
        request: &CreateEventRequest,
    ) -> Result<EventPayload> {
        let user_id = self.jwt.verify(token).map_err(|_| AppError::Unauthorized)?;

        let date_time = validators::parse_event_instant(&request.event_date, &request.event_time)
            .ok_or_else(|| AppError::Validation("Invalid date or time format".to_string()))?;

        let user = db::user_repo::find_by_id(&self.db, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let (event, fields) = db::event_repo::create_with_fields(
            &self.db,
            NewEvent {
                name: &request.name,
                description: &request.description,
                organization: &request.organization,
                date_time,
                location: &request.location,
                org_img_url: request.org_img_url.as_deref(),
                created_by_id: user.id,
            },
            &request.custom_fields,
        )
        .await?;

        tracing::info!(
            event_id = %event.id,
            created_by = %user.id,
            custom_fields = fields.len(),
            "event created"
        );
        Ok(EventPayload::from_rows(event, fields))
    }

    async fn load_event(&self, event_id: Uuid) -> Result<EventPayload> {
        let (event, fields) = db::event_repo::find_by_id(&self.db, event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        Ok(EventPayload::from_rows(event, fields))
    }
}
