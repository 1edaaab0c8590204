//! Platform-specific default paths

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Default backing file location:
/// - macOS: ~/Library/Application Support/smartnotes/notes.json
/// - Linux: ~/.local/share/smartnotes/notes.json
/// - Windows: %APPDATA%/smartnotes/notes.json
pub fn default_notes_file() -> Result<PathBuf> {
    Ok(app_data_dir()?.join("notes.json"))
}

/// Default log directory, next to the backing file.
pub fn default_log_dir() -> Result<PathBuf> {
    Ok(app_data_dir()?.join("logs"))
}

fn app_data_dir() -> Result<PathBuf> {
    let data = dirs::data_dir().context("Could not determine data directory")?;
    Ok(data.join("smartnotes"))
}
