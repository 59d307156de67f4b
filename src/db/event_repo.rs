/// Event database operations
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::event::{CustomField, CustomFieldInput, Event};
use chrono::{DateTime, Utc};

/// Column values for a new event row
#[derive(Debug)]
pub struct NewEvent<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub organization: &'a str,
    pub date_time: DateTime<Utc>,
    pub location: &'a str,
    pub org_img_url: Option<&'a str>,
    pub created_by_id: Uuid,
}

/// Find an event and its custom fields by ID
///
/// Fields come back in insertion order.
pub async fn find_by_id(
    pool: &PgPool,
    event_id: Uuid,
) -> Result<Option<(Event, Vec<CustomField>)>> {
    let event = sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
        .bind(event_id)
        .fetch_optional(pool)
        .await?;

    let Some(event) = event else {
        return Ok(None);
    };

    let fields = sqlx::query_as::<_, CustomField>(
        "SELECT * FROM event_custom_fields WHERE event_id = $1 ORDER BY position",
    )
    .bind(event_id)
    .fetch_all(pool)
    .await?;

    Ok(Some((event, fields)))
}

/// Insert an event and its custom field rows in one transaction.
///
/// Either the event and all of its fields exist afterwards, or none do.
pub async fn create_with_fields(
    pool: &PgPool,
    new_event: NewEvent<'_>,
    custom_fields: &[CustomFieldInput],
) -> Result<(Event, Vec<CustomField>)> {
    let mut tx = pool.begin().await?;

    let event = sqlx::query_as::<_, Event>(
        r#"
        INSERT INTO events (id, name, description, organization, date_time, location, org_img_url, created_by_id, created_at)
        VALUES (gen_random_uuid(), $1, $2, $3, $4, $5, $6, $7, CURRENT_TIMESTAMP)
        RETURNING *
        "#,
    )
    .bind(new_event.name)
    .bind(new_event.description)
    .bind(new_event.organization)
    .bind(new_event.date_time)
    .bind(new_event.location)
    .bind(new_event.org_img_url)
    .bind(new_event.created_by_id)
    .fetch_one(&mut *tx)
    .await?;

    let mut fields = Vec::with_capacity(custom_fields.len());
    for (position, field) in custom_fields.iter().enumerate() {
        let row = sqlx::query_as::<_, CustomField>(
            r#"
            INSERT INTO event_custom_fields (id, event_id, field_name, field_type, position)
            VALUES (gen_random_uuid(), $1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(event.id)
        .bind(&field.field_name)
        .bind(&field.field_type)
        .bind(position as i32)
        .fetch_one(&mut *tx)
        .await?;
        fields.push(row);
    }

    tx.commit().await?;

    Ok((event, fields))
}
