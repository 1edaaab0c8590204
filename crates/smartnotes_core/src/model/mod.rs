//! Domain model for the note collection.
//!
//! # Responsibility
//! - Define the canonical `Note` record persisted in the backing document.
//! - Keep matching rules (tag filter, keyword search) next to the data.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Matching is case-insensitive; stored values keep their original case.

pub mod note;
