use std::time::SystemTime;

use chrono::{DateTime, Utc};
use prost_types::{Timestamp, TimestampError};
use thiserror::Error;

use crate::messages::{CreateRequest, Note, NoteInfo, UpdateNoteInfo, UpdateRequest};

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("missing field: {name}")]
    MissingField { name: &'static str },

    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] TimestampError),
}

impl MappingError {
    pub const fn missing(name: &'static str) -> Self {
        Self::MissingField { name }
    }
}

impl From<notes_core::NoteInfo> for NoteInfo {
    fn from(value: notes_core::NoteInfo) -> Self {
        Self {
            title: value.title,
            context: value.context,
            author: value.author,
            is_public: value.is_public,
        }
    }
}

impl From<NoteInfo> for notes_core::NoteInfo {
    fn from(value: NoteInfo) -> Self {
        Self {
            title: value.title,
            context: value.context,
            author: value.author,
            is_public: value.is_public,
        }
    }
}

impl From<notes_core::Note> for Note {
    fn from(value: notes_core::Note) -> Self {
        Self {
            id: value.id.get(),
            info: Some(value.info.into()),
            created_at: Some(to_timestamp(value.created_at)),
            updated_at: Some(to_timestamp(value.updated_at)),
        }
    }
}

impl TryFrom<Note> for notes_core::Note {
    type Error = MappingError;

    fn try_from(value: Note) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            info: value.info.ok_or(MappingError::missing("info"))?.into(),
            created_at: from_timestamp(
                value
                    .created_at
                    .ok_or(MappingError::missing("created_at"))?,
            )?,
            updated_at: from_timestamp(
                value
                    .updated_at
                    .ok_or(MappingError::missing("updated_at"))?,
            )?,
        })
    }
}

impl From<UpdateNoteInfo> for notes_core::NotePatch {
    fn from(value: UpdateNoteInfo) -> Self {
        Self {
            title: value.title,
            context: value.context,
            author: value.author,
            is_public: value.is_public,
        }
    }
}

impl From<notes_core::NotePatch> for UpdateNoteInfo {
    fn from(value: notes_core::NotePatch) -> Self {
        Self {
            title: value.title,
            context: value.context,
            author: value.author,
            is_public: value.is_public,
        }
    }
}

impl TryFrom<CreateRequest> for notes_core::NoteInfo {
    type Error = MappingError;

    fn try_from(value: CreateRequest) -> Result<Self, Self::Error> {
        value
            .info
            .map(Into::into)
            .ok_or(MappingError::missing("info"))
    }
}

impl UpdateRequest {
    /// Split into the target note and the patch to apply to it
    pub fn into_patch(
        self,
    ) -> Result<(notes_core::NoteId, notes_core::NotePatch), MappingError> {
        let info = self.info.ok_or(MappingError::missing("info"))?;
        Ok((self.id.into(), info.into()))
    }
}

fn to_timestamp(value: DateTime<Utc>) -> Timestamp {
    Timestamp::from(SystemTime::from(value))
}

fn from_timestamp(value: Timestamp) -> Result<DateTime<Utc>, MappingError> {
    Ok(SystemTime::try_from(value)?.into())
}

#[cfg(test)]
mod tests {
    use prost::Message;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn wrapper_fields_keep_false_apart_from_absent() {
        let set_false = UpdateRequest {
            id: 3,
            info: Some(notes_core::NotePatch::new().is_public(false).into()),
        };
        let untouched = UpdateRequest {
            id: 3,
            info: Some(notes_core::NotePatch::new().context("Z").into()),
        };

        let decoded = UpdateRequest::decode(set_false.encode_to_vec().as_slice()).unwrap();
        let (id, patch) = decoded.into_patch().unwrap();
        assert_eq!(id, notes_core::NoteId::new(3));
        assert_eq!(patch, notes_core::NotePatch::new().is_public(false));

        let decoded = UpdateRequest::decode(untouched.encode_to_vec().as_slice()).unwrap();
        let (_, patch) = decoded.into_patch().unwrap();
        assert_eq!(patch.is_public, None);
        assert_eq!(patch.context.as_deref(), Some("Z"));
    }

    #[test]
    fn empty_string_wrapper_is_present() {
        let request = UpdateRequest {
            id: 1,
            info: Some(notes_core::NotePatch::new().title("").into()),
        };
        let decoded = UpdateRequest::decode(request.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded.info.unwrap().title.as_deref(), Some(""));
    }

    #[test]
    fn update_without_info_is_rejected() {
        let request = UpdateRequest { id: 1, info: None };
        let err = request.into_patch().unwrap_err();
        assert!(matches!(err, MappingError::MissingField { name: "info" }));
    }

    #[test]
    fn create_without_info_is_rejected() {
        let err = notes_core::NoteInfo::try_from(CreateRequest { info: None }).unwrap_err();
        assert_eq!(err.to_string(), "missing field: info");
    }

    #[test]
    fn note_timestamps_survive_the_wire() {
        let created = DateTime::parse_from_rfc3339("2024-03-04T05:06:07.123456789Z")
            .unwrap()
            .with_timezone(&Utc);
        let note = notes_core::Note {
            id: notes_core::NoteId::new(99),
            info: notes_core::NoteInfo::new("t", "c", "a", true),
            created_at: created,
            updated_at: created + chrono::Duration::milliseconds(1500),
        };

        let wire = Note::from(note.clone());
        assert_eq!(
            wire.created_at,
            Some(Timestamp {
                seconds: created.timestamp(),
                nanos: 123_456_789,
            })
        );

        let decoded = Note::decode(wire.encode_to_vec().as_slice()).unwrap();
        assert_eq!(notes_core::Note::try_from(decoded).unwrap(), note);
    }
}
