use crate::errors::{ErrorResponse, UpstreamError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    /// Non-2xx from the inventory service, replayed with its original code.
    Upstream { code: u16, message: String },
    Internal(String),
}

impl From<UpstreamError> for HttpError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status { code, message } => match code {
                400 => HttpError::BadRequest(message),
                401 => HttpError::Unauthorized(message),
                403 => HttpError::Forbidden(message),
                404 => HttpError::NotFound(message),
                409 => HttpError::Conflict(message),
                _ => HttpError::Upstream { code, message },
            },
            UpstreamError::Transport(err) => {
                HttpError::Internal(format!("failed to reach inventory service: {err}"))
            }
            UpstreamError::Decode(msg) => {
                HttpError::Internal(format!("failed to decode upstream response: {msg}"))
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::Upstream { code, message } => (
                StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY),
                message,
            ),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(msg, status.as_u16()));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_codes_pass_through() {
        let err: HttpError = UpstreamError::Status {
            code: 422,
            message: "quantity exceeds available stock".into(),
        }
        .into();
        match err {
            HttpError::Upstream { code, .. } => assert_eq!(code, 422),
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[test]
    fn upstream_not_found_maps_to_not_found() {
        let err: HttpError = UpstreamError::Status {
            code: 404,
            message: "product not found".into(),
        }
        .into();
        assert!(matches!(err, HttpError::NotFound(_)));
    }
}
