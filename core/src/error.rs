// vantablack/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Faults raised by the document store.
///
/// Only the write path produces these. Reads are fail-open and never surface
/// an error to the caller (see [`crate::store::DocumentStore::load`]).
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("I/O error on '{}': {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to serialize document: {source}")]
  Serialize {
    #[source]
    source: serde_json::Error,
  },

  #[error("Failed to move written document into place at '{}': {source}", .path.display())]
  Persist {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

impl From<serde_json::Error> for StoreError {
  fn from(source: serde_json::Error) -> Self {
    StoreError::Serialize { source }
  }
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;
