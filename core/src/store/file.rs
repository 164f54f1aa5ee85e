// vantablack/src/store/file.rs

//! Defines `DocumentStore`, the load/save primitives over the JSON document.
//!
//! Reads fail open: a missing file, or one that is not valid JSON, is treated
//! as an empty catalogue so a first run with no file works. Records that parse
//! as JSON but not as their type never empty the document (see
//! [`Document`]). Writes fail closed and return a [`StoreError`].

use crate::document::Document;
use crate::error::{StoreError, StoreResult};
use crate::models::{Article, Product, Promotion};
use crate::record::Record;
use crate::store::collection::Collection;
use parking_lot::{Mutex, MutexGuard};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};
use tracing::{event, instrument, Level};

/// How mutations coordinate with each other inside one process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
  /// Every mutation does its own load, mutate and save with no coordination.
  /// Two overlapping mutations can lose one of the updates.
  #[default]
  Unsynchronized,
  /// Mutations hold a process-wide lock across load, mutate and save.
  /// Other processes writing the same file are not coordinated.
  Serialized,
}

/// Owns the location of the persisted document.
#[derive(Debug)]
pub struct DocumentStore {
  path: PathBuf,
  mode: WriteMode,
  write_lock: Mutex<()>,
}

impl DocumentStore {
  /// Does not touch the filesystem; the file is created on the first save.
  pub fn open(path: impl Into<PathBuf>) -> Self {
    Self::with_mode(path, WriteMode::default())
  }

  pub fn with_mode(path: impl Into<PathBuf>, mode: WriteMode) -> Self {
    Self {
      path: path.into(),
      mode,
      write_lock: Mutex::new(()),
    }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn mode(&self) -> WriteMode {
    self.mode
  }

  /// Reads and parses the document. Never fails: a missing file or text that
  /// is not a JSON object yields empty collections.
  #[instrument(name = "DocumentStore::load", skip_all, fields(path = %self.path.display()))]
  pub fn load(&self) -> Document {
    let raw = match fs::read_to_string(&self.path) {
      Ok(raw) => raw,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        event!(Level::DEBUG, "No document on disk yet; using empty collections.");
        return Document::default();
      }
      Err(e) => {
        event!(Level::WARN, error = %e, "Document unreadable; using empty collections.");
        return Document::default();
      }
    };

    match serde_json::from_str::<Document>(&raw) {
      Ok(doc) => {
        event!(
          Level::TRACE,
          products = doc.products.len(),
          promotions = doc.promotions.len(),
          articles = doc.articles.len(),
          "Document loaded."
        );
        doc
      }
      Err(e) => {
        event!(Level::WARN, error = %e, "Document is not valid JSON; using empty collections.");
        Document::default()
      }
    }
  }

  /// Serializes the full document and replaces the file with it.
  ///
  /// Each save writes its own uniquely named temp file next to the target and
  /// renames it into place, so readers see either the old or the new document
  /// and overlapping saves never clobber each other's temp file.
  #[instrument(name = "DocumentStore::save", skip_all, fields(path = %self.path.display()), err(Display))]
  pub fn save(&self, doc: &Document) -> StoreResult<()> {
    let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
      Some(parent) => {
        fs::create_dir_all(parent).map_err(|source| StoreError::Io {
          path: parent.to_path_buf(),
          source,
        })?;
        parent.to_path_buf()
      }
      None => PathBuf::from("."),
    };

    let json = doc.to_json_pretty()?;
    let mut temp = self.temp_file_in(&dir)?;
    temp.write_all(json.as_bytes()).map_err(|source| StoreError::Io {
      path: temp.path().to_path_buf(),
      source,
    })?;

    // A failed persist drops the temp file, which removes it.
    temp.persist(&self.path).map_err(|e| StoreError::Persist {
      path: self.path.clone(),
      source: e.error,
    })?;

    event!(Level::DEBUG, "Document saved.");
    Ok(())
  }

  /// Runs one load, mutate, save cycle. `apply` returns `None` when it found
  /// nothing to change, in which case nothing is written.
  pub(crate) fn mutate<T>(&self, apply: impl FnOnce(&mut Document) -> Option<T>) -> StoreResult<Option<T>> {
    let _guard = self.mutation_guard();
    let mut doc = self.load();
    let Some(outcome) = apply(&mut doc) else {
      return Ok(None);
    };
    self.save(&doc)?;
    Ok(Some(outcome))
  }

  /// Like [`DocumentStore::mutate`] for changes that always write.
  pub(crate) fn mutate_always<T>(&self, apply: impl FnOnce(&mut Document) -> T) -> StoreResult<T> {
    let _guard = self.mutation_guard();
    let mut doc = self.load();
    let outcome = apply(&mut doc);
    self.save(&doc)?;
    Ok(outcome)
  }

  fn mutation_guard(&self) -> Option<MutexGuard<'_, ()>> {
    match self.mode {
      WriteMode::Serialized => Some(self.write_lock.lock()),
      WriteMode::Unsynchronized => None,
    }
  }

  pub fn collection<R: Record>(&self) -> Collection<'_, R> {
    Collection::new(self)
  }

  pub fn products(&self) -> Collection<'_, Product> {
    self.collection()
  }

  pub fn promotions(&self) -> Collection<'_, Promotion> {
    self.collection()
  }

  pub fn articles(&self) -> Collection<'_, Article> {
    self.collection()
  }

  fn temp_file_in(&self, dir: &Path) -> StoreResult<NamedTempFile> {
    let prefix = self
      .path
      .file_name()
      .map(|n| format!(".{}.", n.to_string_lossy()))
      .unwrap_or_else(|| ".document.".to_string());
    Builder::new()
      .prefix(&prefix)
      .suffix(".tmp")
      .tempfile_in(dir)
      .map_err(|source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
      })
  }
}
