// vantablack/src/store/mod.rs

//! Flat-file persistence: the [`DocumentStore`] reading and writing the whole
//! JSON document, and the per-record-type [`Collection`] operations on top.

pub mod collection;
pub mod file;
mod ids;

pub use collection::Collection;
pub use file::{DocumentStore, WriteMode};
