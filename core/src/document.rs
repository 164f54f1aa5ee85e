// vantablack/src/document.rs

//! The single persisted artifact: one JSON object holding every collection.

use crate::models::{Article, Product, Promotion};
use crate::record::Record;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::{event, Level};

/// The whole catalogue as stored on disk.
///
/// Each collection is an ordered sequence in insertion order. A key missing
/// from the stored JSON deserializes as an empty collection, never as an error.
/// An explicit `null` is read the same way as a missing key.
///
/// Only JSON that does not parse at all makes the document unreadable. A
/// stored record that does not fit its type is kept as [`Entry::Raw`], and
/// unknown top-level keys are kept in `extra`, so a rewrite never drops data
/// it could not interpret.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
  #[serde(default, deserialize_with = "entries")]
  pub products: Vec<Entry<Product>>,
  #[serde(default, deserialize_with = "entries")]
  pub promotions: Vec<Entry<Promotion>>,
  #[serde(default, deserialize_with = "entries")]
  pub articles: Vec<Entry<Article>>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl Document {
  /// True when no collection holds any entry.
  pub fn is_empty(&self) -> bool {
    self.products.is_empty() && self.promotions.is_empty() && self.articles.is_empty()
  }

  /// Pretty-printed JSON with two-space indentation, keys in declaration order.
  pub fn to_json_pretty(&self) -> serde_json::Result<String> {
    serde_json::to_string_pretty(self)
  }
}

/// One stored element of a collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entry<R> {
  Typed(R),
  /// Stored JSON that does not match `R`; written back exactly as read.
  Raw(Value),
}

impl<R: Record> Entry<R> {
  fn from_value(value: Value) -> Self {
    match R::deserialize(&value) {
      Ok(record) => Entry::Typed(record),
      Err(e) => {
        event!(
          Level::WARN,
          collection = R::COLLECTION,
          id = value.get("id").and_then(serde_json::Value::as_str).unwrap_or("<none>"),
          error = %e,
          "Stored record does not match its type; keeping it untouched."
        );
        Entry::Raw(value)
      }
    }
  }

  pub fn typed(&self) -> Option<&R> {
    match self {
      Entry::Typed(record) => Some(record),
      Entry::Raw(_) => None,
    }
  }

  pub fn typed_mut(&mut self) -> Option<&mut R> {
    match self {
      Entry::Typed(record) => Some(record),
      Entry::Raw(_) => None,
    }
  }

  /// The identifier, also for raw entries that carry a string `id`.
  pub fn id(&self) -> Option<&str> {
    match self {
      Entry::Typed(record) => Some(record.id()),
      Entry::Raw(value) => value.get("id").and_then(Value::as_str),
    }
  }
}

/// `null` and missing read as empty. A value that is not an array is logged
/// and read as empty for that collection alone.
fn entries<'de, D, R>(deserializer: D) -> Result<Vec<Entry<R>>, D::Error>
where
  D: Deserializer<'de>,
  R: Record,
{
  match Value::deserialize(deserializer)? {
    Value::Null => Ok(Vec::new()),
    Value::Array(items) => Ok(items.into_iter().map(Entry::from_value).collect()),
    other => {
      event!(
        Level::WARN,
        collection = R::COLLECTION,
        found = %other,
        "Collection is not an array; reading it as empty."
      );
      Ok(Vec::new())
    }
  }
}
