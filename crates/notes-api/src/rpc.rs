//! `note_v1.NoteV1` served as unary protobuf-over-HTTP calls

use axum::extract::{DefaultBodyLimit, State};
use axum::routing::post;
use axum::Router;
use notes_core::NoteInfo;
use notes_proto::{
    CreateRequest, CreateResponse, DeleteRequest, Empty, GetRequest, GetResponse, ListRequest,
    ListResponse, Method, UpdateRequest,
};

use crate::error::RpcError;
use crate::protobuf::Protobuf;
use crate::routes::AppState;

pub fn rpc_router(max_body_bytes: usize) -> Router<AppState> {
    Router::new()
        .route(&Method::Create.path(), post(create))
        .route(&Method::Get.path(), post(get))
        .route(&Method::List.path(), post(list))
        .route(&Method::Update.path(), post(update))
        .route(&Method::Delete.path(), post(delete))
        .layer(DefaultBodyLimit::max(max_body_bytes))
}

async fn create(
    State(state): State<AppState>,
    Protobuf(request): Protobuf<CreateRequest>,
) -> Result<Protobuf<CreateResponse>, RpcError> {
    let info = NoteInfo::try_from(request)?;
    let note = state.notes.create(info)?;
    tracing::info!(rpc = "Create", note_id = %note.id, "Created note");
    Ok(Protobuf(CreateResponse { id: note.id.get() }))
}

async fn get(
    State(state): State<AppState>,
    Protobuf(request): Protobuf<GetRequest>,
) -> Result<Protobuf<GetResponse>, RpcError> {
    let note = state.notes.get(request.id.into())?;
    Ok(Protobuf(GetResponse {
        note: Some(note.into()),
    }))
}

async fn list(
    State(state): State<AppState>,
    Protobuf(request): Protobuf<ListRequest>,
) -> Result<Protobuf<ListResponse>, RpcError> {
    let limit = state.list_limit(request.limit);
    let notes = state.notes.list(limit, request.offset)?;
    Ok(Protobuf(ListResponse {
        notes: notes.into_iter().map(Into::into).collect(),
    }))
}

async fn update(
    State(state): State<AppState>,
    Protobuf(request): Protobuf<UpdateRequest>,
) -> Result<Protobuf<Empty>, RpcError> {
    let (id, patch) = request.into_patch()?;
    state.notes.update(id, patch)?;
    tracing::info!(rpc = "Update", note_id = %id, "Updated note");
    Ok(Protobuf(()))
}

async fn delete(
    State(state): State<AppState>,
    Protobuf(request): Protobuf<DeleteRequest>,
) -> Result<Protobuf<Empty>, RpcError> {
    let id = request.id.into();
    state.notes.delete(id)?;
    tracing::info!(rpc = "Delete", note_id = %id, "Deleted note");
    Ok(Protobuf(()))
}
