use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Failure body in the same envelope shape as successful responses;
/// `data` is always an empty object on errors.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub data: Value,
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            status: "error".into(),
            message: message.into(),
            data: Value::Object(serde_json::Map::new()),
            status_code,
        }
    }
}
