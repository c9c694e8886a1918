//! JSON client for the `/notes` routes.

use notes_core::{Note, NoteId, NoteInfo, NotePatch};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

#[derive(Debug, Clone)]
pub struct HttpNotesClient {
    base_url: String,
    client: reqwest::Client,
}

/// PATCH body; fields left as `None` are not sent at all
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct PatchBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_public: Option<bool>,
}

impl From<NotePatch> for PatchBody {
    fn from(patch: NotePatch) -> Self {
        Self {
            title: patch.title,
            context: patch.context,
            author: patch.author,
            is_public: patch.is_public,
        }
    }
}

impl HttpNotesClient {
    pub fn new(base_url: &str) -> Result<Self, CliError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            client: reqwest::Client::builder().build()?,
        })
    }

    pub async fn create(&self, info: &NoteInfo) -> Result<Note, CliError> {
        let request = self.client.post(self.url("/notes")).json(info);
        Ok(send(request).await?.json::<Note>().await?)
    }

    pub async fn get(&self, id: NoteId) -> Result<Note, CliError> {
        let request = self.client.get(self.note_url(id));
        Ok(send(request).await?.json::<Note>().await?)
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Note>, CliError> {
        let request = self
            .client
            .get(self.url("/notes"))
            .query(&[("limit", limit), ("offset", offset)]);
        Ok(send(request).await?.json::<Vec<Note>>().await?)
    }

    pub async fn update(&self, id: NoteId, patch: NotePatch) -> Result<Note, CliError> {
        let request = self
            .client
            .patch(self.note_url(id))
            .json(&PatchBody::from(patch));
        Ok(send(request).await?.json::<Note>().await?)
    }

    pub async fn delete(&self, id: NoteId) -> Result<(), CliError> {
        send(self.client.delete(self.note_url(id))).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn note_url(&self, id: NoteId) -> String {
        self.url(&format!("/notes/{id}"))
    }
}

async fn send(request: RequestBuilder) -> Result<Response, CliError> {
    let response = request.header("Accept", "application/json").send().await?;
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(CliError::Api(parse_api_error(status, &body)))
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

pub(crate) fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(ErrorBody {
        error: Some(message),
    }) = serde_json::from_str::<ErrorBody>(body)
    {
        return format!("{} ({})", message.trim(), status.as_u16());
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", trimmed, status.as_u16())
    }
}

pub(crate) fn normalize_base_url(raw: &str) -> Result<String, CliError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CliError::InvalidBaseUrl(
            "base URL must not be empty".to_string(),
        ));
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.trim_end_matches('/').to_string())
    } else {
        Err(CliError::InvalidBaseUrl(format!(
            "{trimmed} must include http:// or https://"
        )))
    }
}
