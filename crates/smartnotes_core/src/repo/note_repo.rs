//! Note repository contract and JSON-file implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and query APIs over the backing document.
//! - Keep document mechanics inside the core persistence boundary.
//!
//! # Invariants
//! - Reads re-read the backing file on every call; the repository holds no
//!   cached collection state.
//! - Storage (insertion) order is preserved by every operation.
//! - The file is rewritten only when a mutation actually changed the
//!   collection.

use crate::model::note::{Note, NoteDraft, NoteId};
use crate::store::{StoreFile, StoreResult};

/// Repository interface for note CRUD and query operations.
pub trait NoteRepository {
    /// Creates a note from the draft and returns it with its generated id
    /// and creation timestamp.
    fn add_note(&self, draft: NoteDraft) -> StoreResult<Note>;
    /// Returns all notes in storage order, or only those carrying a
    /// case-insensitive match of `tag` when a filter is supplied.
    fn list_notes(&self, tag: Option<&str>) -> StoreResult<Vec<Note>>;
    /// Returns notes in storage order whose title, body or tags contain the
    /// keyword, case-insensitively. An empty keyword matches every note.
    fn search_notes(&self, keyword: &str) -> StoreResult<Vec<Note>>;
    /// Replaces title, body and tags of the note with the given id.
    /// Returns `None` without rewriting the file when no note matches.
    fn update_note(&self, id: NoteId, draft: NoteDraft) -> StoreResult<Option<Note>>;
    /// Removes the note with the given id. Returns whether a removal
    /// occurred; the file is rewritten only when it did.
    fn delete_note(&self, id: NoteId) -> StoreResult<bool>;
}

/// JSON-file-backed note repository.
pub struct JsonNoteRepository<'store> {
    store: &'store StoreFile,
}

impl<'store> JsonNoteRepository<'store> {
    pub fn new(store: &'store StoreFile) -> Self {
        Self { store }
    }
}

impl NoteRepository for JsonNoteRepository<'_> {
    fn add_note(&self, draft: NoteDraft) -> StoreResult<Note> {
        let mut notes = self.store.read_all()?;
        let note = Note::new(draft);
        notes.push(note.clone());
        self.store.write_all(&notes)?;
        Ok(note)
    }

    fn list_notes(&self, tag: Option<&str>) -> StoreResult<Vec<Note>> {
        let mut notes = self.store.read_all()?;
        if let Some(tag) = tag {
            notes.retain(|note| note.has_tag(tag));
        }
        Ok(notes)
    }

    fn search_notes(&self, keyword: &str) -> StoreResult<Vec<Note>> {
        let mut notes = self.store.read_all()?;
        notes.retain(|note| note.matches_keyword(keyword));
        Ok(notes)
    }

    fn update_note(&self, id: NoteId, draft: NoteDraft) -> StoreResult<Option<Note>> {
        let mut notes = self.store.read_all()?;
        let Some(note) = notes.iter_mut().find(|note| note.id == id) else {
            return Ok(None);
        };
        note.apply_draft(draft);
        let updated = note.clone();
        self.store.write_all(&notes)?;
        Ok(Some(updated))
    }

    fn delete_note(&self, id: NoteId) -> StoreResult<bool> {
        let mut notes = self.store.read_all()?;
        let before = notes.len();
        notes.retain(|note| note.id != id);
        if notes.len() == before {
            return Ok(false);
        }
        self.store.write_all(&notes)?;
        Ok(true)
    }
}
