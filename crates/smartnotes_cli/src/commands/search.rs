//! Search command - keyword search across title, body and tags

use crate::render;
use anyhow::Result;
use smartnotes_core::{JsonNoteRepository, NoteRepository, StoreFile};

pub fn execute(store: &StoreFile, keyword: &str) -> Result<String> {
    let repo = JsonNoteRepository::new(store);
    let notes = repo.search_notes(keyword)?;
    Ok(render::render_notes(&notes))
}
