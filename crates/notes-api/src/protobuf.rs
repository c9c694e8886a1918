use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use prost::Message;

use crate::error::{RpcCode, RpcError, GRPC_STATUS};

/// Protobuf request body extractor and response body
#[derive(Debug, Clone, Copy, Default)]
pub struct Protobuf<T>(pub T);

impl<T, S> FromRequest<S> for Protobuf<T>
where
    T: Message + Default,
    S: Send + Sync,
{
    type Rejection = RpcError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_protobuf_content_type(req.headers()) {
            return Err(RpcError::unsupported_media_type(format!(
                "expected content-type {}",
                notes_proto::CONTENT_TYPE
            )));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| {
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    RpcError::too_large("request body is too large")
                } else {
                    RpcError::invalid_argument(rejection.body_text())
                }
            })?;

        T::decode(bytes)
            .map(Self)
            .map_err(|error| RpcError::invalid_argument(format!("malformed request: {error}")))
    }
}

impl<T: Message> IntoResponse for Protobuf<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.encode_to_vec().into_response();
        let headers = response.headers_mut();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(notes_proto::CONTENT_TYPE),
        );
        headers.insert(GRPC_STATUS, HeaderValue::from(RpcCode::Ok as i32));
        response
    }
}

fn has_protobuf_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::trim)
        .is_some_and(|essence| {
            essence.eq_ignore_ascii_case(notes_proto::CONTENT_TYPE)
                || essence.eq_ignore_ascii_case("application/protobuf")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());
        headers
    }

    #[test]
    fn content_type_check_accepts_parameters() {
        assert!(has_protobuf_content_type(&headers_with("application/x-protobuf")));
        assert!(has_protobuf_content_type(&headers_with(
            "application/x-protobuf; proto=note_v1.GetRequest"
        )));
        assert!(has_protobuf_content_type(&headers_with("application/protobuf")));
    }

    #[test]
    fn content_type_check_rejects_json_and_missing() {
        assert!(!has_protobuf_content_type(&headers_with("application/json")));
        assert!(!has_protobuf_content_type(&HeaderMap::new()));
    }
}
