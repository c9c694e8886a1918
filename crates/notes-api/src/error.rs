use axum::extract::rejection::JsonRejection;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Errors returned by the JSON routes
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Request body too large: {0}")]
    PayloadTooLarge(String),
    #[error("Internal server error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Body rejections keep their 413; everything else is a 400
    pub fn from_json_rejection(rejection: &JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(rejection.body_text())
        } else {
            Self::BadRequest(rejection.body_text())
        }
    }

    const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<notes_core::Error> for AppError {
    fn from(error: notes_core::Error) -> Self {
        match error {
            notes_core::Error::NotFound(_) => Self::NotFound(error.to_string()),
            notes_core::Error::InvalidArgument(message) => Self::BadRequest(message),
            notes_core::Error::IdentifierExhausted { .. } => Self::Internal(error.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// gRPC status codes used by the RPC routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcCode {
    Ok = 0,
    InvalidArgument = 3,
    NotFound = 5,
    ResourceExhausted = 8,
    Unimplemented = 12,
}

pub const GRPC_STATUS: HeaderName = HeaderName::from_static("grpc-status");
pub const GRPC_MESSAGE: HeaderName = HeaderName::from_static("grpc-message");

/// Errors returned by the protobuf RPC routes
///
/// Rendered as an HTTP status plus `grpc-status`/`grpc-message` headers and a
/// plain-text body.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RpcError {
    status: StatusCode,
    code: RpcCode,
    message: String,
}

impl RpcError {
    pub fn new(status: StatusCode, code: RpcCode, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, RpcCode::InvalidArgument, message)
    }

    pub fn unsupported_media_type(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RpcCode::Unimplemented,
            message,
        )
    }

    pub fn too_large(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::PAYLOAD_TOO_LARGE,
            RpcCode::ResourceExhausted,
            message,
        )
    }
}

impl From<notes_core::Error> for RpcError {
    fn from(error: notes_core::Error) -> Self {
        match &error {
            notes_core::Error::NotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, RpcCode::NotFound, error.to_string())
            }
            notes_core::Error::InvalidArgument(_) => Self::invalid_argument(error.to_string()),
            notes_core::Error::IdentifierExhausted { .. } => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                RpcCode::ResourceExhausted,
                error.to_string(),
            ),
        }
    }
}

impl From<notes_proto::MappingError> for RpcError {
    fn from(error: notes_proto::MappingError) -> Self {
        Self::invalid_argument(error.to_string())
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(error = %self.message, code = self.code as i32, "RPC failed");
        }
        let mut response = (self.status, self.message.clone()).into_response();
        let headers = response.headers_mut();
        headers.insert(GRPC_STATUS, HeaderValue::from(self.code as i32));
        // Header values must be visible ASCII; skip messages that are not.
        if let Ok(message) = HeaderValue::from_str(&self.message) {
            headers.insert(GRPC_MESSAGE, message);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"));
        response
    }
}

#[cfg(test)]
mod tests {
    use notes_core::NoteId;

    use super::*;

    #[test]
    fn store_errors_map_to_http_statuses() {
        let not_found = AppError::from(notes_core::Error::NotFound(NoteId::new(4)));
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let invalid = AppError::from(notes_core::Error::invalid_argument("title too long"));
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let exhausted = AppError::from(notes_core::Error::IdentifierExhausted { attempts: 16 });
        assert_eq!(exhausted.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn rpc_error_carries_grpc_headers() {
        let response = RpcError::from(notes_core::Error::NotFound(NoteId::new(9))).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[GRPC_STATUS], "5");
        assert_eq!(response.headers()[GRPC_MESSAGE], "Note not found: 9");
    }
}
