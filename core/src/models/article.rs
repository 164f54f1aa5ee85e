// vantablack/src/models/article.rs

use crate::content::markup::{self, Block};
use crate::document::{Document, Entry};
use crate::models::nullable;
use crate::record::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A knowledge-base article.
///
/// `content` is the short summary shown in listings; `full_content` is the
/// detail body written in the line-oriented markup understood by
/// [`markup::parse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
  pub id: String,
  pub title: String,
  #[serde(default)]
  pub content: String,
  #[serde(default)]
  pub full_content: String,
  #[serde(default)]
  pub category: String,
  pub date: NaiveDate,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub author: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl Article {
  /// The detail body, falling back to the summary when `full_content` is empty.
  /// A whitespace-only body is still the body.
  pub fn body(&self) -> &str {
    if self.full_content.is_empty() {
      &self.content
    } else {
      &self.full_content
    }
  }

  pub fn blocks(&self) -> Vec<Block> {
    markup::parse(self.body())
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticle {
  pub title: String,
  #[serde(default)]
  pub content: String,
  #[serde(default)]
  pub full_content: String,
  #[serde(default)]
  pub category: String,
  pub date: NaiveDate,
  #[serde(default)]
  pub author: Option<String>,
  #[serde(default)]
  pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePatch {
  pub title: Option<String>,
  pub content: Option<String>,
  pub full_content: Option<String>,
  pub category: Option<String>,
  pub date: Option<NaiveDate>,
  #[serde(default, deserialize_with = "nullable::deserialize")]
  pub author: Option<Option<String>>,
  #[serde(default, deserialize_with = "nullable::deserialize")]
  pub image: Option<Option<String>>,
}

impl Record for Article {
  type Draft = NewArticle;
  type Patch = ArticlePatch;

  const COLLECTION: &'static str = "articles";
  const LABEL: &'static str = "Article";

  fn id(&self) -> &str {
    &self.id
  }

  fn from_draft(id: String, draft: NewArticle) -> Self {
    Article {
      id,
      title: draft.title,
      content: draft.content,
      full_content: draft.full_content,
      category: draft.category,
      date: draft.date,
      author: draft.author,
      image: draft.image,
      extra: Map::new(),
    }
  }

  fn apply(&mut self, patch: ArticlePatch) {
    if let Some(title) = patch.title {
      self.title = title;
    }
    if let Some(content) = patch.content {
      self.content = content;
    }
    if let Some(full_content) = patch.full_content {
      self.full_content = full_content;
    }
    if let Some(category) = patch.category {
      self.category = category;
    }
    if let Some(date) = patch.date {
      self.date = date;
    }
    nullable::merge(&mut self.author, patch.author);
    nullable::merge(&mut self.image, patch.image);
  }

  fn in_document(doc: &Document) -> &[Entry<Self>] {
    &doc.articles
  }

  fn in_document_mut(doc: &mut Document) -> &mut Vec<Entry<Self>> {
    &mut doc.articles
  }
}
