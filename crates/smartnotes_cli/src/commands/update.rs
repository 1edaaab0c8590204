//! Update command - replace a note's title, body and tags

use super::note_not_found;
use anyhow::{bail, Result};
use owo_colors::OwoColorize;
use smartnotes_core::{JsonNoteRepository, NoteDraft, NoteRepository, StoreFile};
use uuid::Uuid;

pub fn execute(
    store: &StoreFile,
    note_id: &str,
    title: &str,
    body: &str,
    tags: Vec<String>,
) -> Result<String> {
    if title.trim().is_empty() {
        bail!("Title cannot be empty");
    }
    if body.trim().is_empty() {
        bail!("Body cannot be empty");
    }

    let Ok(id) = Uuid::parse_str(note_id.trim()) else {
        return Ok(note_not_found());
    };

    let repo = JsonNoteRepository::new(store);
    match repo.update_note(id, NoteDraft::new(title, body, tags))? {
        Some(note) => Ok(format!("{} {}", "Updated note".green(), note.id)),
        None => Ok(note_not_found()),
    }
}
