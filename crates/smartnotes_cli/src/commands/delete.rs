//! Delete command - remove a note by id

use super::note_not_found;
use anyhow::Result;
use owo_colors::OwoColorize;
use smartnotes_core::{JsonNoteRepository, NoteRepository, StoreFile};
use uuid::Uuid;

pub fn execute(store: &StoreFile, note_id: &str) -> Result<String> {
    let Ok(id) = Uuid::parse_str(note_id.trim()) else {
        return Ok(note_not_found());
    };

    let repo = JsonNoteRepository::new(store);
    if repo.delete_note(id)? {
        Ok("Note deleted.".green().to_string())
    } else {
        Ok(note_not_found())
    }
}
