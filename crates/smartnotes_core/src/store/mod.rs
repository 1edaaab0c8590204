//! JSON-document storage bootstrap and persistence entry points.
//!
//! # Responsibility
//! - Create and open the single backing file owned by the store.
//! - Read and rewrite the whole note collection as one JSON array.
//!
//! # Invariants
//! - The backing file is only ever rewritten by `StoreFile::write_all`; a
//!   malformed file survives byte-for-byte until the next mutation.
//! - A failed parse degrades the read to an empty collection, never to an
//!   error surfaced to the caller.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod file;

pub use file::{open_store, StoreFile};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
