use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{DefaultBodyLimit, Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use notes_core::{InMemoryNoteStore, Note, NoteId, NoteInfo, NotePatch, NoteRepository};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::rpc::rpc_router;

const DEFAULT_LIST_LIMIT: i64 = 100;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub notes: Arc<dyn NoteRepository>,
}

impl AppState {
    pub fn from_config(config: Arc<AppConfig>) -> Self {
        Self {
            notes: Arc::new(InMemoryNoteStore::new().with_limits(config.limits)),
            config,
        }
    }

    /// Clamp a requested list size to the configured maximum
    pub fn list_limit(&self, requested: i64) -> i64 {
        requested.min(self.config.list_max_limit)
    }
}

pub fn app_router(state: AppState) -> Router {
    let note_routes = Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route(
            "/notes/{id}",
            get(get_note).patch(update_note).delete(delete_note),
        )
        .layer(DefaultBodyLimit::max(state.config.json_max_body_bytes));

    Router::new()
        .route("/healthz", get(healthz))
        .merge(note_routes)
        .merge(rpc_router(state.config.rpc_max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: i64,
    notes: usize,
}

async fn healthz(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().timestamp(),
        notes: state.notes.len(),
    })
}

/// Create body; missing or `null` fields take their empty values
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CreateNoteRequest {
    title: Option<String>,
    context: Option<String>,
    author: Option<String>,
    is_public: Option<bool>,
}

impl From<CreateNoteRequest> for NoteInfo {
    fn from(request: CreateNoteRequest) -> Self {
        Self::new(
            request.title.unwrap_or_default(),
            request.context.unwrap_or_default(),
            request.author.unwrap_or_default(),
            request.is_public.unwrap_or_default(),
        )
    }
}

/// Patch body; an omitted or `null` field is left untouched
#[derive(Debug, Deserialize)]
struct UpdateNoteRequest {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    context: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    is_public: Option<bool>,
}

impl From<UpdateNoteRequest> for NotePatch {
    fn from(request: UpdateNoteRequest) -> Self {
        Self {
            title: request.title,
            context: request.context,
            author: request.author,
            is_public: request.is_public,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    limit: Option<i64>,
    offset: Option<i64>,
}

async fn create_note(
    State(state): State<AppState>,
    body: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), AppError> {
    let Json(request) = body.map_err(|rejection| AppError::from_json_rejection(&rejection))?;
    let note = state.notes.create(request.into())?;
    tracing::info!(note_id = %note.id, "Created note");
    Ok((StatusCode::CREATED, Json(note)))
}

async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Note>, AppError> {
    let id = parse_note_id(&id)?;
    Ok(Json(state.notes.get(id)?))
}

async fn list_notes(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Note>>, AppError> {
    let Query(query) = query.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
    let limit = state.list_limit(query.limit.unwrap_or(DEFAULT_LIST_LIMIT));
    let notes = state.notes.list(limit, query.offset.unwrap_or(0))?;
    Ok(Json(notes))
}

async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> Result<Json<Note>, AppError> {
    let id = parse_note_id(&id)?;
    let Json(request) = body.map_err(|rejection| AppError::from_json_rejection(&rejection))?;
    let note = state.notes.update(id, request.into())?;
    tracing::info!(note_id = %note.id, "Updated note");
    Ok(Json(note))
}

async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_note_id(&id)?;
    state.notes.delete(id)?;
    tracing::info!(note_id = %id, "Deleted note");
    Ok(StatusCode::NO_CONTENT)
}

fn parse_note_id(raw: &str) -> Result<NoteId, AppError> {
    raw.parse()
        .map_err(|_| AppError::bad_request(format!("Invalid note ID: {raw}")))
}
