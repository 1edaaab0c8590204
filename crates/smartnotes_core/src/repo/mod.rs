//! Repository layer abstractions and the JSON-file implementation.
//!
//! # Responsibility
//! - Define the caller-facing operation contract over the note collection.
//! - Isolate document read/write cycles from caller orchestration.
//!
//! # Invariants
//! - Not-found is a semantic result (`None` / `false`), never an error.
//! - Every mutating operation is a full read-modify-write cycle over the
//!   backing file.

pub mod note_repo;
