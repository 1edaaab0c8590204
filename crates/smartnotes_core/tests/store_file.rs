use smartnotes_core::{open_store, JsonNoteRepository, NoteDraft, NoteRepository};
use std::fs;
use tempfile::tempdir;

#[test]
fn open_creates_missing_file_with_empty_array() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.json");

    let store = open_store(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    assert!(store.read_all().unwrap().is_empty());
    assert_eq!(store.path(), path.as_path());
}

#[test]
fn open_creates_missing_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("notes.json");

    open_store(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn open_does_not_truncate_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.json");
    fs::write(&path, "this is not json").unwrap();

    open_store(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "this is not json");
}

#[test]
fn malformed_document_reads_as_empty_without_rewriting_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.json");
    fs::write(&path, "{{ broken").unwrap();

    let store = open_store(&path).unwrap();
    assert!(store.read_all().unwrap().is_empty());
    // Read paths never touch the file; the corruption survives byte-for-byte.
    assert_eq!(fs::read_to_string(&path).unwrap(), "{{ broken");
}

#[test]
fn next_mutation_overwrites_a_malformed_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.json");
    fs::write(&path, "{{ broken").unwrap();

    let store = open_store(&path).unwrap();
    let repo = JsonNoteRepository::new(&store);
    repo.add_note(NoteDraft::new("fresh", "start", Vec::new())).unwrap();

    let notes = store.read_all().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "fresh");
}

#[test]
fn unknown_extra_fields_are_tolerated() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.json");
    fs::write(
        &path,
        r#"[
  {
    "id": "11111111-2222-4333-8444-555555555555",
    "title": "legacy",
    "body": "record",
    "tags": [],
    "created_at": "2026-02-13T10:00:00",
    "color": "blue",
    "pinned": true
  }
]"#,
    )
    .unwrap();

    let store = open_store(&path).unwrap();
    let notes = store.read_all().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "legacy");
}

#[test]
fn missing_optional_fields_default() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.json");
    fs::write(
        &path,
        r#"[{"id": "11111111-2222-4333-8444-555555555555", "title": "bare", "body": "record"}]"#,
    )
    .unwrap();

    let store = open_store(&path).unwrap();
    let notes = store.read_all().unwrap();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].tags.is_empty());
    assert!(notes[0].created_at.is_empty());
}

#[test]
fn record_missing_a_required_field_degrades_the_read_to_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.json");
    fs::write(
        &path,
        r#"[{"id": "11111111-2222-4333-8444-555555555555", "title": "no body"}]"#,
    )
    .unwrap();

    let store = open_store(&path).unwrap();
    assert!(store.read_all().unwrap().is_empty());
}

#[test]
fn record_with_invalid_id_degrades_the_read_to_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.json");
    fs::write(
        &path,
        r#"[{"id": "not-a-uuid", "title": "t", "body": "b"}]"#,
    )
    .unwrap();

    let store = open_store(&path).unwrap();
    assert!(store.read_all().unwrap().is_empty());
}

#[test]
fn write_all_pretty_prints_the_document() {
    let dir = tempdir().unwrap();
    let store = open_store(dir.path().join("notes.json")).unwrap();
    let repo = JsonNoteRepository::new(&store);

    repo.add_note(NoteDraft::new("pretty", "printed", Vec::new())).unwrap();

    let content = fs::read_to_string(store.path()).unwrap();
    assert!(content.starts_with("[\n"));
    assert!(content.contains("  {\n"));
}
