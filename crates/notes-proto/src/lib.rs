//! `note_v1` wire schema
//!
//! The messages are declared directly with `prost` derives so no `protoc` is
//! needed at build time. Field tags match `note_v1.proto`:
//!
//! ```proto
//! service NoteV1 {
//!   rpc Create(CreateRequest) returns (CreateResponse);
//!   rpc Get(GetRequest) returns (GetResponse);
//!   rpc List(ListRequest) returns (ListResponse);
//!   rpc Update(UpdateRequest) returns (google.protobuf.Empty);
//!   rpc Delete(DeleteRequest) returns (google.protobuf.Empty);
//! }
//! ```
//!
//! This is the only place that knows how wire nullability is spelled: the
//! wrapper fields of [`UpdateNoteInfo`] become the absent/present fields of a
//! [`notes_core::NotePatch`].

mod convert;
mod messages;

pub use convert::MappingError;
pub use messages::*;

/// Fully qualified service name
pub const SERVICE: &str = "note_v1.NoteV1";

/// Content type of protobuf request and response bodies
pub const CONTENT_TYPE: &str = "application/x-protobuf";

/// The unary methods of `note_v1.NoteV1`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Create,
    Get,
    List,
    Update,
    Delete,
}

impl Method {
    pub const ALL: [Self; 5] = [
        Self::Create,
        Self::Get,
        Self::List,
        Self::Update,
        Self::Delete,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Get => "Get",
            Self::List => "List",
            Self::Update => "Update",
            Self::Delete => "Delete",
        }
    }

    /// HTTP path the method is served under, e.g. `/note_v1.NoteV1/Get`
    pub fn path(self) -> String {
        format!("/{SERVICE}/{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_paths_are_qualified() {
        assert_eq!(Method::Get.path(), "/note_v1.NoteV1/Get");
        assert_eq!(Method::Delete.path(), "/note_v1.NoteV1/Delete");
    }
}
