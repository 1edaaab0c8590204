//! List command - show all notes, optionally filtered by tag

use crate::render;
use anyhow::Result;
use smartnotes_core::{JsonNoteRepository, NoteRepository, StoreFile};

pub fn execute(store: &StoreFile, tag: Option<&str>) -> Result<String> {
    // A blank tag value means no filter.
    let filter = tag.map(str::trim).filter(|value| !value.is_empty());

    let repo = JsonNoteRepository::new(store);
    let notes = repo.list_notes(filter)?;
    Ok(render::render_notes(&notes))
}
