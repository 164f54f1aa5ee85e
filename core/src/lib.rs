// src/lib.rs

//! VantaBlack: the flat-file catalogue behind the VantaBlack Service storefront.
//!
//! All state lives in one JSON document holding three collections:
//!  - products (phones for sale, new or pre-owned),
//!  - promotions (time-boxed discounts),
//!  - articles (knowledge-base posts).
//!
//! The [`DocumentStore`] loads and saves the whole document. A
//! [`Collection`] gives list/get/create/update/delete over one record type,
//! each call doing a full load and, for mutations, a full rewrite. There is no
//! locking between processes; see [`WriteMode`] for the in-process option.

pub mod content;
pub mod document;
pub mod error;
pub mod models;
pub mod record;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::document::{Document, Entry};
pub use crate::error::{StoreError, StoreResult};
pub use crate::record::Record;
pub use crate::store::{Collection, DocumentStore, WriteMode};

pub use crate::models::{
  Article, ArticlePatch, Category, NewArticle, NewProduct, NewPromotion, Product, ProductPatch, Promotion,
  PromotionPatch,
};

pub use crate::content::{Block, VideoSource};

/*
    Typical use:
    1. `let store = DocumentStore::open("lib/data.json");`
    2. `let product = store.products().create(new_product)?;`
    3. `store.products().update(&product.id, ProductPatch { stock: Some(2), ..Default::default() })?;`
    4. `store.products().delete(&product.id)?;`
*/
