use core::fmt;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The one envelope every response uses, success or failure: the upstream
/// service sends it and the gateway re-emits it unchanged in shape.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: T,
    pub status_code: u16,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, status_code: u16) -> Self {
        Self {
            status: "success".into(),
            message: message.into(),
            data,
            status_code,
        }
    }
}

impl<T: fmt::Debug> fmt::Display for ApiResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ApiResponse {{ status: {}, message: {}, data: {:?} }}",
            self.status, self.message, self.data
        )
    }
}
