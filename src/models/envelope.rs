use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Uniform response envelope used by every endpoint:
/// `{"status": u16, "data": {"message": string|null, "payload": object|null}}`
///
/// Errors produce the same shape via `AppError::error_response`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: u16,
    pub data: ApiData<T>,
}

#[derive(Debug, Serialize)]
pub struct ApiData<T: Serialize> {
    pub message: Option<String>,
    pub payload: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: StatusCode, message: Option<&str>, payload: Option<T>) -> Self {
        Self {
            status: status.as_u16(),
            data: ApiData {
                message: message.map(str::to_string),
                payload,
            },
        }
    }

    /// 200 with payload and no message
    pub fn ok(payload: T) -> Self {
        Self::new(StatusCode::OK, None, Some(payload))
    }

    /// 201 with payload and a message
    pub fn created(message: &str, payload: T) -> Self {
        Self::new(StatusCode::CREATED, Some(message), Some(payload))
    }

    /// 200 with a message and no payload
    pub fn message(message: &str) -> Self {
        Self::new(StatusCode::OK, Some(message), None)
    }

    pub fn into_response(self) -> HttpResponse {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status).json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_envelope_shape() {
        let envelope = ApiResponse::ok(json!({"token": "abc"}));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["status"], 200);
        assert_eq!(value["data"]["message"], serde_json::Value::Null);
        assert_eq!(value["data"]["payload"]["token"], "abc");
    }

    #[test]
    fn message_envelope_has_null_payload() {
        let envelope: ApiResponse<serde_json::Value> =
            ApiResponse::message("Logged out successfully");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["data"]["message"], "Logged out successfully");
        assert_eq!(value["data"]["payload"], serde_json::Value::Null);
    }

    #[test]
    fn created_envelope_carries_both() {
        let envelope = ApiResponse::created("Event created successfully", json!({"id": 1}));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["status"], 201);
        assert_eq!(value["data"]["message"], "Event created successfully");
        assert_eq!(value["data"]["payload"]["id"], 1);
    }
}
