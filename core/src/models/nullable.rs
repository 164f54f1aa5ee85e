// vantablack/src/models/nullable.rs

//! Deserializer for patch fields that distinguish "absent" from "null".
//!
//! Used with `#[serde(default, deserialize_with = "nullable::deserialize")]`:
//! a missing key stays `None`, an explicit `null` becomes `Some(None)` and a
//! value becomes `Some(Some(v))`.

use serde::{Deserialize, Deserializer};

pub(crate) fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  Option::<T>::deserialize(deserializer).map(Some)
}

/// Overwrites `slot` when the patch carried the key at all.
pub(crate) fn merge<T>(slot: &mut Option<T>, patch: Option<Option<T>>) {
  if let Some(value) = patch {
    *slot = value;
  }
}
