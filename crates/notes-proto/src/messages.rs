use prost_types::Timestamp;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NoteInfo {
    #[prost(string, tag = "1")]
    pub title: String,
    #[prost(string, tag = "2")]
    pub context: String,
    #[prost(string, tag = "3")]
    pub author: String,
    #[prost(bool, tag = "4")]
    pub is_public: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Note {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(message, optional, tag = "2")]
    pub info: Option<NoteInfo>,
    #[prost(message, optional, tag = "3")]
    pub created_at: Option<Timestamp>,
    #[prost(message, optional, tag = "4")]
    pub updated_at: Option<Timestamp>,
}

/// Patchable fields as `google.protobuf.StringValue` / `BoolValue` wrappers
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateNoteInfo {
    #[prost(message, optional, tag = "1")]
    pub title: Option<String>,
    #[prost(message, optional, tag = "2")]
    pub context: Option<String>,
    #[prost(message, optional, tag = "3")]
    pub author: Option<String>,
    #[prost(message, optional, tag = "4")]
    pub is_public: Option<bool>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateRequest {
    #[prost(message, optional, tag = "1")]
    pub info: Option<NoteInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateResponse {
    #[prost(int64, tag = "1")]
    pub id: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetRequest {
    #[prost(int64, tag = "1")]
    pub id: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetResponse {
    #[prost(message, optional, tag = "1")]
    pub note: Option<Note>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListRequest {
    #[prost(int64, tag = "1")]
    pub limit: i64,
    #[prost(int64, tag = "2")]
    pub offset: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListResponse {
    #[prost(message, repeated, tag = "1")]
    pub notes: Vec<Note>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateRequest {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(message, optional, tag = "2")]
    pub info: Option<UpdateNoteInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteRequest {
    #[prost(int64, tag = "1")]
    pub id: i64,
}

/// `google.protobuf.Empty`, the acknowledgment of Update and Delete
pub type Empty = ();
