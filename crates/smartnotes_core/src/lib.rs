//! Core domain logic for SmartNotes.
//! This crate is the single source of truth for note persistence and query
//! behavior; presentation surfaces are thin callers over it.

pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use logging::{default_log_level, init_logging};
pub use model::note::{Note, NoteDraft, NoteId};
pub use repo::note_repo::{JsonNoteRepository, NoteRepository};
pub use store::{open_store, StoreError, StoreFile, StoreResult};
