// vantablack/src/models/product.rs

use crate::content::video::VideoSource;
use crate::document::{Document, Entry};
use crate::models::nullable;
use crate::record::Record;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Product condition, persisted as the shop's own Thai labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
  /// Brand new ("มือ1").
  #[serde(rename = "มือ1")]
  FirstHand,
  /// Pre-owned ("มือ2").
  #[serde(rename = "มือ2")]
  SecondHand,
}

impl Category {
  pub fn label(self) -> &'static str {
    match self {
      Category::FirstHand => "มือ1",
      Category::SecondHand => "มือ2",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: String,
  pub name: String,
  pub brand: String,
  pub price: f64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub original_price: Option<f64>,
  #[serde(default)]
  pub description: String,
  pub stock: u32,
  pub category: Category,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub images: Option<Vec<String>>,
  /// Direct video URL or a YouTube/Vimeo link.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub video: Option<String>,
  /// Stored keys this type does not model, carried through rewrites.
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl Product {
  pub fn video_source(&self) -> Option<VideoSource> {
    self.video.as_deref().map(VideoSource::classify)
  }
}

/// Create payload: a [`Product`] without its identifier.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
  pub name: String,
  pub brand: String,
  pub price: f64,
  #[serde(default)]
  pub original_price: Option<f64>,
  #[serde(default)]
  pub description: String,
  pub stock: u32,
  pub category: Category,
  #[serde(default)]
  pub image: Option<String>,
  #[serde(default)]
  pub images: Option<Vec<String>>,
  #[serde(default)]
  pub video: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
  pub name: Option<String>,
  pub brand: Option<String>,
  pub price: Option<f64>,
  #[serde(default, deserialize_with = "nullable::deserialize")]
  pub original_price: Option<Option<f64>>,
  pub description: Option<String>,
  pub stock: Option<u32>,
  pub category: Option<Category>,
  #[serde(default, deserialize_with = "nullable::deserialize")]
  pub image: Option<Option<String>>,
  #[serde(default, deserialize_with = "nullable::deserialize")]
  pub images: Option<Option<Vec<String>>>,
  #[serde(default, deserialize_with = "nullable::deserialize")]
  pub video: Option<Option<String>>,
}

impl Record for Product {
  type Draft = NewProduct;
  type Patch = ProductPatch;

  const COLLECTION: &'static str = "products";
  const LABEL: &'static str = "Product";

  fn id(&self) -> &str {
    &self.id
  }

  fn from_draft(id: String, draft: NewProduct) -> Self {
    Product {
      id,
      name: draft.name,
      brand: draft.brand,
      price: draft.price,
      original_price: draft.original_price,
      description: draft.description,
      stock: draft.stock,
      category: draft.category,
      image: draft.image,
      images: draft.images,
      video: draft.video,
      extra: Map::new(),
    }
  }

  fn apply(&mut self, patch: ProductPatch) {
    if let Some(name) = patch.name {
      self.name = name;
    }
    if let Some(brand) = patch.brand {
      self.brand = brand;
    }
    if let Some(price) = patch.price {
      self.price = price;
    }
    nullable::merge(&mut self.original_price, patch.original_price);
    if let Some(description) = patch.description {
      self.description = description;
    }
    if let Some(stock) = patch.stock {
      self.stock = stock;
    }
    if let Some(category) = patch.category {
      self.category = category;
    }
    nullable::merge(&mut self.image, patch.image);
    nullable::merge(&mut self.images, patch.images);
    nullable::merge(&mut self.video, patch.video);
  }

  fn in_document(doc: &Document) -> &[Entry<Self>] {
    &doc.products
  }

  fn in_document_mut(doc: &mut Document) -> &mut Vec<Entry<Self>> {
    &mut doc.products
  }
}
