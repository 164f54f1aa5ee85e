// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use chrono::NaiveDate;
use std::path::PathBuf;
use tempfile::TempDir;
use tracing::Level;
use vantablack::{Category, DocumentStore, NewArticle, NewProduct, NewPromotion, WriteMode};

// --- Isolated stores ---

/// A store pointing at `data.json` inside a fresh temp dir. Keep the
/// `TempDir` alive for the duration of the test.
pub fn temp_store() -> (TempDir, DocumentStore) {
  temp_store_with_mode(WriteMode::Unsynchronized)
}

pub fn temp_store_with_mode(mode: WriteMode) -> (TempDir, DocumentStore) {
  let dir = tempfile::tempdir().expect("create temp dir");
  let store = DocumentStore::with_mode(dir.path().join("data.json"), mode);
  (dir, store)
}

pub fn data_path(dir: &TempDir) -> PathBuf {
  dir.path().join("data.json")
}

pub fn write_raw(dir: &TempDir, contents: &str) {
  std::fs::write(data_path(dir), contents).expect("write raw document");
}

// --- Sample payloads ---

pub fn iphone_11() -> NewProduct {
  serde_json::from_value(serde_json::json!({
    "name": "iPhone 11",
    "brand": "Apple",
    "price": 8000,
    "stock": 3,
    "category": "มือ2"
  }))
  .expect("valid product draft")
}

pub fn product_draft(name: &str) -> NewProduct {
  NewProduct {
    name: name.to_string(),
    brand: "Samsung".to_string(),
    price: 12900.0,
    original_price: Some(15900.0),
    description: "Unlocked, 128GB".to_string(),
    stock: 5,
    category: Category::FirstHand,
    image: Some("/uploads/a.jpg".to_string()),
    images: Some(vec!["/uploads/b.jpg".to_string(), "/uploads/c.jpg".to_string()]),
    video: Some("https://youtu.be/dQw4w9WgXcQ".to_string()),
  }
}

pub fn promotion_draft(title: &str) -> NewPromotion {
  NewPromotion {
    title: title.to_string(),
    description: "Screen replacement discount".to_string(),
    discount: 20,
    start_date: date(2024, 1, 1),
    end_date: date(2024, 1, 31),
    active: true,
    image: None,
    images: None,
    video: None,
  }
}

pub fn article_draft(title: &str) -> NewArticle {
  NewArticle {
    title: title.to_string(),
    content: "How to check a used phone before buying.".to_string(),
    full_content: "**Checklist**\n\n- Battery health\n- IMEI status".to_string(),
    category: "Buying guide".to_string(),
    date: date(2024, 2, 10),
    author: Some("VantaBlack".to_string()),
    image: None,
  }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
