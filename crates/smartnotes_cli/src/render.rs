//! Text rendering of note collections.
//!
//! Rendered blocks stay plain text so callers and tests can assert on them
//! directly; colored status accents live in the command modules.

use smartnotes_core::Note;

/// Renders each note as a header block with a dashed underline, the body,
/// and the creation timestamp. Empty results render a single message line.
pub fn render_notes(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes found.".to_string();
    }

    let mut out = String::new();
    for note in notes {
        let tags = if note.tags.is_empty() {
            "no tags".to_string()
        } else {
            note.tags.join(", ")
        };
        let header = format!("[{}] {} ({})", note.id, note.title, tags);
        out.push_str(&header);
        out.push('\n');
        // Underline length counts characters, not bytes, so non-ASCII
        // titles keep a matching rule.
        out.push_str(&"-".repeat(header.chars().count()));
        out.push('\n');
        out.push_str(&note.body);
        out.push('\n');
        out.push_str(&format!("Created: {}\n\n", note.created_at));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::render_notes;
    use smartnotes_core::{Note, NoteDraft};

    #[test]
    fn empty_collection_renders_message() {
        assert_eq!(render_notes(&[]), "No notes found.");
    }

    #[test]
    fn note_block_contains_header_underline_body_and_timestamp() {
        let note = Note::new(NoteDraft::new(
            "Shopping",
            "Buy milk",
            vec!["errands".to_string(), "home".to_string()],
        ));

        let rendered = render_notes(std::slice::from_ref(&note));
        let header = format!("[{}] Shopping (errands, home)", note.id);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], header);
        assert_eq!(lines[1], "-".repeat(header.chars().count()));
        assert_eq!(lines[2], "Buy milk");
        assert_eq!(lines[3], format!("Created: {}", note.created_at));
    }

    #[test]
    fn note_without_tags_renders_placeholder() {
        let note = Note::new(NoteDraft::new("Bare", "no labels", Vec::new()));
        let rendered = render_notes(std::slice::from_ref(&note));
        assert!(rendered.contains("Bare (no tags)"));
    }
}
