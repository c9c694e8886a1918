//! Data models for notes

mod note;
mod patch;

pub use note::{Note, NoteId, NoteInfo};
pub use patch::NotePatch;
