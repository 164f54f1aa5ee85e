// vantablack/src/record.rs

//! Defines the `Record` trait, the seam between the generic collection
//! operations and the concrete catalogue types.

use crate::document::{Document, Entry};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// One entity type stored as a named collection inside the [`Document`].
///
/// `Draft` is the create payload (every field except the identifier) and
/// `Patch` is the partial-update payload where every field may be absent.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
  type Draft: DeserializeOwned + Send + 'static;
  type Patch: DeserializeOwned + Default + Send + 'static;

  /// Top-level key of the collection in the persisted document.
  const COLLECTION: &'static str;
  /// Human-facing singular name, used in "not found" messages.
  const LABEL: &'static str;

  fn id(&self) -> &str;

  fn from_draft(id: String, draft: Self::Draft) -> Self;

  /// Shallow merge: fields present in `patch` overwrite, absent ones are kept.
  /// The identifier is never touched.
  fn apply(&mut self, patch: Self::Patch);

  fn in_document(doc: &Document) -> &[Entry<Self>];

  fn in_document_mut(doc: &mut Document) -> &mut Vec<Entry<Self>>;
}
