// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use once_cell::sync::Lazy;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tracing::Level;
use vantablack_server::{AppConfig, AppState};

/// State backed by `data.json` in a fresh temp dir. Keep the `TempDir` alive.
pub fn temp_state() -> (TempDir, AppState) {
  let dir = tempfile::tempdir().expect("create temp dir");
  let state = state_at(&dir.path().join("data.json"));
  (dir, state)
}

pub fn state_at(data_file: &Path) -> AppState {
  AppState::new(Arc::new(AppConfig::with_data_file(data_file)))
}

pub fn iphone_11_json() -> serde_json::Value {
  serde_json::json!({
    "name": "iPhone 11",
    "brand": "Apple",
    "price": 8000,
    "stock": 3,
    "category": "มือ2"
  })
}

pub fn promotion_json() -> serde_json::Value {
  serde_json::json!({
    "title": "Screen repair 20% off",
    "description": "All models",
    "discount": 20,
    "startDate": "2024-01-01",
    "endDate": "2024-01-31",
    "active": true
  })
}

pub fn article_json() -> serde_json::Value {
  serde_json::json!({
    "title": "Buying a used phone",
    "content": "What to check first.",
    "fullContent": "**Checklist**\n\n- Battery\n- IMEI\n\n1. Power on\n2. Call test",
    "category": "Guide",
    "date": "2024-02-10"
  })
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
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
