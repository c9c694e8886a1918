//! Protobuf client for the `note_v1.NoteV1` routes.

use std::time::Duration;

use notes_core::{Note, NoteId, NoteInfo, NotePatch};
use notes_proto::{
    CreateRequest, CreateResponse, DeleteRequest, GetRequest, GetResponse, ListRequest,
    ListResponse, MappingError, Method, UpdateRequest,
};
use prost::Message;
use reqwest::header::{HeaderMap, CONTENT_TYPE};

use crate::error::CliError;
use crate::http_client::normalize_base_url;

const GRPC_STATUS: &str = "grpc-status";
const GRPC_MESSAGE: &str = "grpc-message";

#[derive(Debug, Clone)]
pub struct RpcNotesClient {
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl RpcNotesClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CliError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            timeout,
            client: reqwest::Client::builder().build()?,
        })
    }

    pub async fn create(&self, info: NoteInfo) -> Result<NoteId, CliError> {
        let request = CreateRequest {
            info: Some(info.into()),
        };
        let response: CreateResponse = self.call(Method::Create, &request).await?;
        Ok(NoteId::new(response.id))
    }

    pub async fn get(&self, id: NoteId) -> Result<Note, CliError> {
        let response: GetResponse = self.call(Method::Get, &GetRequest { id: id.get() }).await?;
        let note = response.note.ok_or_else(|| MappingError::missing("note"))?;
        Ok(note.try_into()?)
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Note>, CliError> {
        let response: ListResponse = self
            .call(Method::List, &ListRequest { limit, offset })
            .await?;
        response
            .notes
            .into_iter()
            .map(|note| Note::try_from(note).map_err(CliError::from))
            .collect()
    }

    pub async fn update(&self, id: NoteId, patch: NotePatch) -> Result<(), CliError> {
        let request = UpdateRequest {
            id: id.get(),
            info: Some(patch.into()),
        };
        self.call::<()>(Method::Update, &request).await
    }

    pub async fn delete(&self, id: NoteId) -> Result<(), CliError> {
        self.call::<()>(Method::Delete, &DeleteRequest { id: id.get() })
            .await
    }

    async fn call<M: Message + Default>(
        &self,
        method: Method,
        request: &impl Message,
    ) -> Result<M, CliError> {
        let url = format!("{}{}", self.base_url, method.path());
        tracing::debug!(rpc = method.name(), %url, "Sending RPC");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, notes_proto::CONTENT_TYPE)
            .timeout(self.timeout)
            .body(request.encode_to_vec())
            .send()
            .await
            .map_err(|error| self.transport_error(error))?;

        let status = response.status();
        let code = grpc_code(response.headers());
        if !status.is_success() || code.is_some_and(|code| code != 0) {
            let message = grpc_message(response.headers());
            let body = response.text().await.unwrap_or_default();
            return Err(CliError::Rpc {
                code: code.unwrap_or(UNKNOWN_CODE),
                message: message.unwrap_or_else(|| fallback_message(status.as_u16(), &body)),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|error| self.transport_error(error))?;
        Ok(M::decode(bytes)?)
    }

    fn transport_error(&self, error: reqwest::Error) -> CliError {
        if error.is_timeout() {
            let millis = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
            CliError::Timeout(millis)
        } else {
            CliError::Http(error)
        }
    }
}

/// gRPC `UNKNOWN`, used when the server sent no status header
const UNKNOWN_CODE: i32 = 2;

fn grpc_code(headers: &HeaderMap) -> Option<i32> {
    headers
        .get(GRPC_STATUS)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

fn grpc_message(headers: &HeaderMap) -> Option<String> {
    headers
        .get(GRPC_MESSAGE)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

fn fallback_message(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {status}")
    } else {
        format!("{trimmed} (HTTP {status})")
    }
}
