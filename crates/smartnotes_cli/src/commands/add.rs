//! Add command - create a new note

use anyhow::{bail, Result};
use owo_colors::OwoColorize;
use smartnotes_core::{JsonNoteRepository, NoteDraft, NoteRepository, StoreFile};

pub fn execute(store: &StoreFile, title: &str, body: &str, tags: Vec<String>) -> Result<String> {
    if title.trim().is_empty() {
        bail!("Title cannot be empty");
    }
    if body.trim().is_empty() {
        bail!("Body cannot be empty");
    }

    let repo = JsonNoteRepository::new(store);
    let note = repo.add_note(NoteDraft::new(title, body, tags))?;

    Ok(format!("{} {}", "Created note".green(), note.id))
}
