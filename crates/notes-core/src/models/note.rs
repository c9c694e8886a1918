//! Note model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// A store-assigned note identifier (non-negative, 63 significant bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    /// Wrap a raw identifier received from a caller.
    ///
    /// This only names a note; identifiers are assigned by the store at create time.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw integer value
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for NoteId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// The mutable content of a note
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteInfo {
    /// Note title
    pub title: String,
    /// Body text
    pub context: String,
    /// Author name
    pub author: String,
    /// Whether the note is publicly visible
    pub is_public: bool,
}

impl NoteInfo {
    /// Build a note payload from its four fields
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        context: impl Into<String>,
        author: impl Into<String>,
        is_public: bool,
    ) -> Self {
        Self {
            title: title.into(),
            context: context.into(),
            author: author.into(),
            is_public,
        }
    }
}

/// A stored note
///
/// Values handed out by the store are snapshots; changing one does not touch
/// the stored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier, immutable once assigned
    pub id: NoteId,
    /// Note content
    pub info: NoteInfo,
    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, never earlier than `created_at`
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub(crate) const fn new(id: NoteId, info: NoteInfo, now: DateTime<Utc>) -> Self {
        Self {
            id,
            info,
            created_at: now,
            updated_at: now,
        }
    }
}
