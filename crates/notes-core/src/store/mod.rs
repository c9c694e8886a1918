//! Note storage
//!
//! [`NoteRepository`] is the interface the transports program against;
//! [`InMemoryNoteStore`] is the process-local implementation.

mod clock;
mod ids;
mod limits;
mod memory;

pub use clock::{Clock, SystemClock};
pub use ids::{IdGenerator, RandomIds, MAX_ID_ATTEMPTS};
pub use limits::StoreLimits;
pub use memory::InMemoryNoteStore;

use crate::error::Result;
use crate::models::{Note, NoteId, NoteInfo, NotePatch};

/// Note storage operations
///
/// Every operation is synchronous and all-or-nothing: it either completes
/// fully or returns an error without changing anything.
pub trait NoteRepository: Send + Sync {
    /// Store a new note under a fresh identifier
    fn create(&self, info: NoteInfo) -> Result<Note>;

    /// Get the current snapshot of a note
    fn get(&self, id: NoteId) -> Result<Note>;

    /// List notes in insertion order, skipping `offset` and returning at most `limit`
    ///
    /// A `limit` of zero or less returns nothing; a negative `offset` counts as zero.
    fn list(&self, limit: i64, offset: i64) -> Result<Vec<Note>>;

    /// Apply a partial update and refresh `updated_at`
    fn update(&self, id: NoteId, patch: NotePatch) -> Result<Note>;

    /// Remove a note permanently
    fn delete(&self, id: NoteId) -> Result<()>;

    /// Number of stored notes
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
