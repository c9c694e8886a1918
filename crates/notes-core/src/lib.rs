//! notes-core - Core library for the notes service
//!
//! This crate contains the note models, partial-update semantics, and the
//! concurrency-safe in-memory store shared by the HTTP and RPC transports.
//! It knows nothing about wire formats or status codes.

pub mod error;
pub mod models;
pub mod store;

pub use error::{Error, Result};
pub use models::{Note, NoteId, NoteInfo, NotePatch};
pub use store::{InMemoryNoteStore, NoteRepository, StoreLimits};
