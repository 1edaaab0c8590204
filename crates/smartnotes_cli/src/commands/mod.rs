//! CLI commands

use owo_colors::OwoColorize;

pub mod add;
pub mod delete;
pub mod list;
pub mod search;
pub mod update;

/// Shared not-found message for id-addressed commands. Ids that do not
/// parse as UUIDs take this path too, matching the behavior for unknown
/// ids.
pub(crate) fn note_not_found() -> String {
    "Note not found.".yellow().to_string()
}
