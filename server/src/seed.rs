// vantablack_server/src/seed.rs

//! Starter catalogue written on first run when `SEED_DB` is enabled.

use crate::errors::{AppError, Result as AppResult};
use chrono::{Days, Utc};
use tracing::info;
use vantablack::{Category, DocumentStore, NewArticle, NewProduct, NewPromotion};

/// Creates one record of each kind when the data file does not exist yet.
/// Returns `false` and writes nothing when a file is already present.
pub fn seed_if_missing(store: &DocumentStore) -> AppResult<bool> {
  if store.path().exists() {
    info!(path = %store.path().display(), "Data file present; skipping seed.");
    return Ok(false);
  }

  let today = Utc::now().date_naive();
  let month_end = today.checked_add_days(Days::new(30)).unwrap_or(today);

  store
    .products()
    .create(NewProduct {
      name: "iPhone 13".to_string(),
      brand: "Apple".to_string(),
      price: 18900.0,
      original_price: Some(21900.0),
      description: "เครื่องใหม่ ประกันศูนย์ 1 ปี".to_string(),
      stock: 5,
      category: Category::FirstHand,
      image: None,
      images: None,
      video: None,
    })
    .map_err(|e| AppError::storage("seed products", e))?;

  store
    .products()
    .create(NewProduct {
      name: "iPhone 11".to_string(),
      brand: "Apple".to_string(),
      price: 8000.0,
      original_price: None,
      description: "มือสอง สภาพดี แบตเตอรี่ 85%".to_string(),
      stock: 3,
      category: Category::SecondHand,
      image: None,
      images: None,
      video: None,
    })
    .map_err(|e| AppError::storage("seed products", e))?;

  store
    .promotions()
    .create(NewPromotion {
      title: "เปลี่ยนจอลด 20%".to_string(),
      description: "ลดค่าเปลี่ยนหน้าจอทุกรุ่น".to_string(),
      discount: 20,
      start_date: today,
      end_date: month_end,
      active: true,
      image: None,
      images: None,
      video: None,
    })
    .map_err(|e| AppError::storage("seed promotions", e))?;

  store
    .articles()
    .create(NewArticle {
      title: "เช็คมือถือมือสองก่อนซื้อ".to_string(),
      content: "สิ่งที่ควรตรวจก่อนซื้อมือถือมือสอง".to_string(),
      full_content: "**ตรวจสภาพเครื่อง**\n\n- สุขภาพแบตเตอรี่\n- สถานะ IMEI\n\n1. เปิดเครื่อง\n2. ทดสอบกล้อง".to_string(),
      category: "คู่มือการซื้อ".to_string(),
      date: today,
      author: Some("VantaBlack Service".to_string()),
      image: None,
    })
    .map_err(|e| AppError::storage("seed articles", e))?;

  info!(path = %store.path().display(), "Starter catalogue written.");
  Ok(true)
}
