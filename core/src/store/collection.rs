// vantablack/src/store/collection.rs

//! Defines `Collection<R>`, list/get/create/update/delete over one named
//! collection of the document.
//!
//! Every call loads the whole document. Mutations write the whole document
//! back, and only when a record was actually created, changed or removed.
//!
//! Stored entries that do not match the record type are skipped by `list`,
//! `get` and `update`, can still be removed by `delete`, and are otherwise
//! written back untouched.

use crate::document::Entry;
use crate::error::StoreResult;
use crate::record::Record;
use crate::store::file::DocumentStore;
use crate::store::ids;
use std::marker::PhantomData;
use tracing::{event, instrument, Level};

pub struct Collection<'s, R: Record> {
  store: &'s DocumentStore,
  _record: PhantomData<R>,
}

impl<'s, R: Record> Collection<'s, R> {
  pub(crate) fn new(store: &'s DocumentStore) -> Self {
    Self {
      store,
      _record: PhantomData,
    }
  }

  /// All records in stored order.
  #[instrument(name = "Collection::list", skip_all, fields(collection = R::COLLECTION))]
  pub fn list(&self) -> Vec<R> {
    let doc = self.store.load();
    R::in_document(&doc).iter().filter_map(Entry::typed).cloned().collect()
  }

  #[instrument(name = "Collection::get", skip(self), fields(collection = R::COLLECTION))]
  pub fn get(&self, id: &str) -> Option<R> {
    let doc = self.store.load();
    R::in_document(&doc)
      .iter()
      .filter_map(Entry::typed)
      .find(|r| r.id() == id)
      .cloned()
  }

  /// Assigns an identifier, appends the record and persists the document.
  #[instrument(name = "Collection::create", skip_all, fields(collection = R::COLLECTION), err(Display))]
  pub fn create(&self, draft: R::Draft) -> StoreResult<R> {
    let record = self.store.mutate_always(|doc| {
      let entries = R::in_document_mut(doc);
      let record = R::from_draft(ids::next_id(entries), draft);
      entries.push(Entry::Typed(record.clone()));
      record
    })?;

    event!(Level::INFO, id = record.id(), "{} created.", R::LABEL);
    Ok(record)
  }

  /// Merges `patch` onto the record with `id`. Returns `None`, without
  /// writing, when no such record exists.
  #[instrument(name = "Collection::update", skip(self, patch), fields(collection = R::COLLECTION), err(Display))]
  pub fn update(&self, id: &str, patch: R::Patch) -> StoreResult<Option<R>> {
    let updated = self.store.mutate(|doc| {
      let record = R::in_document_mut(doc)
        .iter_mut()
        .filter_map(Entry::typed_mut)
        .find(|r| r.id() == id)?;
      record.apply(patch);
      Some(record.clone())
    })?;

    match &updated {
      Some(_) => event!(Level::INFO, "{} updated.", R::LABEL),
      None => event!(Level::DEBUG, "{} not found; nothing written.", R::LABEL),
    }
    Ok(updated)
  }

  /// Removes the record with `id`. Returns `false`, without writing, when no
  /// such record exists.
  #[instrument(name = "Collection::delete", skip(self), fields(collection = R::COLLECTION), err(Display))]
  pub fn delete(&self, id: &str) -> StoreResult<bool> {
    let removed = self.store.mutate(|doc| {
      let entries = R::in_document_mut(doc);
      let index = entries.iter().position(|e| e.id() == Some(id))?;
      Some(entries.remove(index))
    })?;

    match &removed {
      Some(_) => event!(Level::INFO, "{} deleted.", R::LABEL),
      None => event!(Level::DEBUG, "{} not found; nothing written.", R::LABEL),
    }
    Ok(removed.is_some())
  }
}
