// vantablack/src/store/ids.rs

//! Time-derived record identifiers.

use crate::document::Entry;
use crate::record::Record;
use chrono::Utc;

/// Current Unix time in milliseconds as a decimal string, bumped forward
/// while it collides with an identifier already in `existing`.
///
/// Only collisions visible in the loaded collection are avoided; two
/// processes creating in the same millisecond can still pick the same value.
pub(crate) fn next_id<R: Record>(existing: &[Entry<R>]) -> String {
  next_id_from(Utc::now().timestamp_millis(), existing)
}

pub(crate) fn next_id_from<R: Record>(now_millis: i64, existing: &[Entry<R>]) -> String {
  let mut candidate = now_millis;
  loop {
    let id = candidate.to_string();
    if !existing.iter().any(|e| e.id() == Some(id.as_str())) {
      return id;
    }
    candidate += 1;
  }
}
