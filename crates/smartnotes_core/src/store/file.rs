//! Backing-file bootstrap and whole-document read/write.
//!
//! # Responsibility
//! - Ensure the backing file exists before any operation touches it.
//! - Parse the full document on read and rewrite it in full on write.
//!
//! # Invariants
//! - `open_store` never truncates an existing file, malformed or not.
//! - `read_all` recovers from a malformed document by returning an empty
//!   collection; only I/O failures propagate.

use super::StoreResult;
use crate::model::note::Note;
use log::{error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

const EMPTY_DOCUMENT: &str = "[]";

/// Handle to the single JSON file backing the note collection.
///
/// Constructed only through [`open_store`], so every handle points at an
/// existing file.
pub struct StoreFile {
    path: PathBuf,
}

/// Opens the backing file, creating it (and missing parent directories)
/// with an empty array when absent.
///
/// # Side effects
/// - May create directories and the backing file.
/// - Emits `store_open` logging events with duration and status.
pub fn open_store(path: impl AsRef<Path>) -> StoreResult<StoreFile> {
    let started_at = Instant::now();
    info!("event=store_open module=store status=start");

    let path = path.as_ref().to_path_buf();
    match ensure_backing_file(&path) {
        Ok(created) => {
            info!(
                "event=store_open module=store status=ok created={} duration_ms={} path={}",
                created,
                started_at.elapsed().as_millis(),
                path.display()
            );
            Ok(StoreFile { path })
        }
        Err(err) => {
            error!(
                "event=store_open module=store status=error duration_ms={} error_code=store_open_failed path={} error={}",
                started_at.elapsed().as_millis(),
                path.display(),
                err
            );
            Err(err)
        }
    }
}

fn ensure_backing_file(path: &Path) -> StoreResult<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, EMPTY_DOCUMENT)?;
    Ok(true)
}

impl StoreFile {
    /// Reads and parses the whole document.
    ///
    /// A parse failure (malformed JSON, wrong shape, missing required field,
    /// invalid UUID) is recovered locally: a warning is logged and an empty
    /// collection is returned without touching the file.
    pub fn read_all(&self) -> StoreResult<Vec<Note>> {
        let content = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&content) {
            Ok(notes) => Ok(notes),
            Err(err) => {
                warn!(
                    "event=store_read module=store status=recovered error_code=malformed_document path={} error={}",
                    self.path.display(),
                    err
                );
                Ok(Vec::new())
            }
        }
    }

    /// Serializes the full collection pretty-printed and rewrites the file
    /// in place.
    pub fn write_all(&self, notes: &[Note]) -> StoreResult<()> {
        let document = serde_json::to_string_pretty(notes)?;
        fs::write(&self.path, document)?;
        Ok(())
    }

    /// Location of the backing file, for callers that display it.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
