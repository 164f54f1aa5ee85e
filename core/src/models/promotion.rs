// vantablack/src/models/promotion.rs

use crate::content::video::VideoSource;
use crate::document::{Document, Entry};
use crate::models::nullable;
use crate::record::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
  pub id: String,
  pub title: String,
  #[serde(default)]
  pub description: String,
  /// Percentage off. Expected in 0..=100 but stored as given.
  pub discount: i64,
  pub start_date: NaiveDate,
  pub end_date: NaiveDate,
  pub active: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub images: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub video: Option<String>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl Promotion {
  /// True when the promotion is switched on and `date` falls inside its
  /// inclusive start/end window.
  pub fn is_running_on(&self, date: NaiveDate) -> bool {
    self.active && self.start_date <= date && date <= self.end_date
  }

  /// Applies the discount to `price`. Out-of-range discounts are clamped for
  /// the computation only.
  pub fn discounted(&self, price: f64) -> f64 {
    let percent = self.discount.clamp(0, 100) as f64;
    price * (100.0 - percent) / 100.0
  }

  pub fn video_source(&self) -> Option<VideoSource> {
    self.video.as_deref().map(VideoSource::classify)
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPromotion {
  pub title: String,
  #[serde(default)]
  pub description: String,
  pub discount: i64,
  pub start_date: NaiveDate,
  pub end_date: NaiveDate,
  pub active: bool,
  #[serde(default)]
  pub image: Option<String>,
  #[serde(default)]
  pub images: Option<Vec<String>>,
  #[serde(default)]
  pub video: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionPatch {
  pub title: Option<String>,
  pub description: Option<String>,
  pub discount: Option<i64>,
  pub start_date: Option<NaiveDate>,
  pub end_date: Option<NaiveDate>,
  pub active: Option<bool>,
  #[serde(default, deserialize_with = "nullable::deserialize")]
  pub image: Option<Option<String>>,
  #[serde(default, deserialize_with = "nullable::deserialize")]
  pub images: Option<Option<Vec<String>>>,
  #[serde(default, deserialize_with = "nullable::deserialize")]
  pub video: Option<Option<String>>,
}

impl Record for Promotion {
  type Draft = NewPromotion;
  type Patch = PromotionPatch;

  const COLLECTION: &'static str = "promotions";
  const LABEL: &'static str = "Promotion";

  fn id(&self) -> &str {
    &self.id
  }

  fn from_draft(id: String, draft: NewPromotion) -> Self {
    Promotion {
      id,
      title: draft.title,
      description: draft.description,
      discount: draft.discount,
      start_date: draft.start_date,
      end_date: draft.end_date,
      active: draft.active,
      image: draft.image,
      images: draft.images,
      video: draft.video,
      extra: Map::new(),
    }
  }

  fn apply(&mut self, patch: PromotionPatch) {
    if let Some(title) = patch.title {
      self.title = title;
    }
    if let Some(description) = patch.description {
      self.description = description;
    }
    if let Some(discount) = patch.discount {
      self.discount = discount;
    }
    if let Some(start_date) = patch.start_date {
      self.start_date = start_date;
    }
    if let Some(end_date) = patch.end_date {
      self.end_date = end_date;
    }
    if let Some(active) = patch.active {
      self.active = active;
    }
    nullable::merge(&mut self.image, patch.image);
    nullable::merge(&mut self.images, patch.images);
    nullable::merge(&mut self.video, patch.video);
  }

  fn in_document(doc: &Document) -> &[Entry<Self>] {
    &doc.promotions
  }

  fn in_document_mut(doc: &mut Document) -> &mut Vec<Entry<Self>> {
    &mut doc.promotions
  }
}
