/// Event model and wire DTOs
///
/// Wire casing follows the public API contract: camelCase with the legacy
/// `orgImgURL` spelling, timestamps as RFC3339 strings.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub organization: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub org_img_url: Option<String>,
    pub created_by_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Child row owned by exactly one event; `position` preserves input order.
#[derive(Debug, Clone, FromRow)]
pub struct CustomField {
    pub id: Uuid,
    pub event_id: Uuid,
    pub field_name: String,
    pub field_type: String,
    pub position: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub name: String,
    pub description: String,
    pub organization: String,
    pub event_date: String,
    pub event_time: String,
    pub location: String,
    #[serde(rename = "orgImgURL", default)]
    pub org_img_url: Option<String>,
    #[serde(default)]
    pub custom_fields: Vec<CustomFieldInput>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldInput {
    pub field_name: String,
    pub field_type: String,
}

/// Serialized event returned to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub organization: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
    #[serde(rename = "orgImgURL")]
    pub org_img_url: Option<String>,
    pub created_by_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub custom_fields: Vec<CustomFieldPayload>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldPayload {
    pub field_name: String,
    pub field_type: String,
}

impl EventPayload {
    pub fn from_rows(event: Event, fields: Vec<CustomField>) -> Self {
        Self {
            id: event.id,
            name: event.name,
            description: event.description,
            organization: event.organization,
            date_time: event.date_time,
            location: event.location,
            org_img_url: event.org_img_url,
            created_by_id: event.created_by_id,
            created_at: event.created_at,
            custom_fields: fields
                .into_iter()
                .map(|f| CustomFieldPayload {
                    field_name: f.field_name,
                    field_type: f.field_type,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_event() -> Event {
        Event {
            id: Uuid::new_v4(),
            name: "RustConf Meetup".into(),
            description: "Monthly meetup".into(),
            organization: "Rust Berlin".into(),
            date_time: Utc.with_ymd_and_hms(2024, 6, 15, 18, 30, 0).unwrap(),
            location: "Berlin".into(),
            org_img_url: None,
            created_by_id: Uuid::new_v4(),
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn payload_uses_wire_casing() {
        let field = CustomField {
            id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            field_name: "T-Shirt Size".into(),
            field_type: "select".into(),
            position: 0,
        };
        let value =
            serde_json::to_value(EventPayload::from_rows(sample_event(), vec![field])).unwrap();

        assert!(value.get("dateTime").is_some());
        assert!(value.get("orgImgURL").is_some());
        assert!(value.get("createdById").is_some());
        assert_eq!(value["customFields"][0]["fieldName"], "T-Shirt Size");
        assert_eq!(value["customFields"][0]["fieldType"], "select");
    }

    #[test]
    fn timestamps_serialize_as_rfc3339() {
        let value = serde_json::to_value(EventPayload::from_rows(sample_event(), vec![])).unwrap();
        assert_eq!(value["dateTime"], "2024-06-15T18:30:00Z");
    }

    #[test]
    fn create_request_accepts_wire_json() {
        let request: CreateEventRequest = serde_json::from_value(serde_json::json!({
            "name": "RustConf Meetup",
            "description": "Monthly meetup",
            "organization": "Rust Berlin",
            "eventDate": "2024-06-15",
            "eventTime": "18:30",
            "location": "Berlin",
            "orgImgURL": "https://example.com/logo.png",
            "customFields": [
                {"fieldName": "T-Shirt Size", "fieldType": "select"}
            ]
        }))
        .unwrap();

        assert_eq!(request.event_date, "2024-06-15");
        assert_eq!(request.org_img_url.as_deref(), Some("https://example.com/logo.png"));
        assert_eq!(request.custom_fields.len(), 1);
    }

    #[test]
    fn custom_fields_default_to_empty() {
        let request: CreateEventRequest = serde_json::from_value(serde_json::json!({
            "name": "n",
            "description": "d",
            "organization": "o",
            "eventDate": "2024-06-15",
            "eventTime": "18:30",
            "location": "l"
        }))
        .unwrap();
        assert!(request.custom_fields.is_empty());
        assert!(request.org_img_url.is_none());
    }
}
