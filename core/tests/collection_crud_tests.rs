// tests/collection_crud_tests.rs
mod common;

use common::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use vantablack::{Category, DocumentStore, ProductPatch, PromotionPatch, Record, WriteMode};

#[test]
fn test_create_assigns_id_and_get_returns_equal_record() {
  setup_tracing();
  let (_dir, store) = temp_store();

  let created = store.products().create(iphone_11()).unwrap();
  assert!(!created.id.is_empty());
  assert!(created.id.chars().all(|c| c.is_ascii_digit()), "time-derived id, got {}", created.id);
  assert_eq!(created.stock, 3);

  let fetched = store.products().get(&created.id);
  assert_eq!(fetched, Some(created));
}

#[test]
fn test_create_appends_in_insertion_order() {
  setup_tracing();
  let (_dir, store) = temp_store();
  let products = store.products();

  let first = products.create(product_draft("A")).unwrap();
  let second = products.create(product_draft("B")).unwrap();
  let before = products.list();
  let third = products.create(product_draft("C")).unwrap();
  let after = products.list();

  assert_eq!(after.len(), before.len() + 1);
  assert_eq!(after.last(), Some(&third));
  let names: Vec<&str> = after.iter().map(|p| p.name.as_str()).collect();
  assert_eq!(names, vec!["A", "B", "C"]);
  assert_eq!(after[0].id, first.id);
  assert_eq!(after[1].id, second.id);
}

#[test]
fn test_rapid_creates_get_distinct_ids() {
  setup_tracing();
  let (_dir, store) = temp_store();

  let ids: Vec<String> = (0..25)
    .map(|i| store.promotions().create(promotion_draft(&format!("P{i}"))).unwrap().id)
    .collect();
  let unique: HashSet<&String> = ids.iter().collect();
  assert_eq!(unique.len(), ids.len());
}

#[test]
fn test_update_overwrites_only_supplied_fields() {
  setup_tracing();
  let (_dir, store) = temp_store();
  let original = store.products().create(product_draft("Galaxy S23")).unwrap();

  let patch = ProductPatch {
    stock: Some(2),
    price: Some(11900.0),
    ..Default::default()
  };
  let updated = store.products().update(&original.id, patch).unwrap().unwrap();

  assert_eq!(updated.stock, 2);
  assert_eq!(updated.price, 11900.0);
  let mut expected = original.clone();
  expected.stock = 2;
  expected.price = 11900.0;
  assert_eq!(updated, expected);
  assert_eq!(store.products().get(&original.id), Some(expected));
}

#[test]
fn test_update_keeps_record_position() {
  setup_tracing();
  let (_dir, store) = temp_store();
  let first = store.products().create(product_draft("A")).unwrap();
  store.products().create(product_draft("B")).unwrap();

  let patch = ProductPatch {
    name: Some("A2".to_string()),
    ..Default::default()
  };
  store.products().update(&first.id, patch).unwrap();

  let names: Vec<String> = store.products().list().into_iter().map(|p| p.name).collect();
  assert_eq!(names, vec!["A2".to_string(), "B".to_string()]);
}

#[test]
fn test_update_with_empty_patch_keeps_record() {
  setup_tracing();
  let (_dir, store) = temp_store();
  let original = store.promotions().create(promotion_draft("Songkran")).unwrap();

  let updated = store
    .promotions()
    .update(&original.id, PromotionPatch::default())
    .unwrap();
  assert_eq!(updated, Some(original));
}

#[test]
fn test_update_missing_id_returns_none_without_writing() {
  setup_tracing();
  let (dir, store) = temp_store();
  store.products().create(iphone_11()).unwrap();
  let path = data_path(&dir);
  let bytes_before = std::fs::read(&path).unwrap();
  let mtime_before = std::fs::metadata(&path).unwrap().modified().unwrap();

  let result = store
    .products()
    .update("does-not-exist", ProductPatch {
      stock: Some(0),
      ..Default::default()
    })
    .unwrap();

  assert!(result.is_none());
  assert_eq!(std::fs::read(&path).unwrap(), bytes_before);
  assert_eq!(std::fs::metadata(&path).unwrap().modified().unwrap(), mtime_before);
}

#[test]
fn test_update_on_empty_store_does_not_create_file() {
  setup_tracing();
  let (_dir, store) = temp_store();

  let result = store.articles().update("1", Default::default()).unwrap();
  assert!(result.is_none());
  assert!(!store.path().exists());
}

#[test]
fn test_delete_removes_exactly_one_record() {
  setup_tracing();
  let (_dir, store) = temp_store();
  let keep = store.articles().create(article_draft("Keep")).unwrap();
  let doomed = store.articles().create(article_draft("Remove")).unwrap();

  assert!(store.articles().delete(&doomed.id).unwrap());
  assert_eq!(store.articles().get(&doomed.id), None);
  assert_eq!(store.articles().list(), vec![keep]);
}

#[test]
fn test_delete_missing_id_returns_false_without_writing() {
  setup_tracing();
  let (dir, store) = temp_store();
  store.promotions().create(promotion_draft("Keep")).unwrap();
  let path = data_path(&dir);
  let bytes_before = std::fs::read(&path).unwrap();
  let mtime_before = std::fs::metadata(&path).unwrap().modified().unwrap();

  assert!(!store.promotions().delete("never-created").unwrap());
  assert_eq!(std::fs::read(&path).unwrap(), bytes_before);
  assert_eq!(std::fs::metadata(&path).unwrap().modified().unwrap(), mtime_before);
}

#[test]
fn test_collections_are_independent() {
  setup_tracing();
  let (_dir, store) = temp_store();
  let product = store.products().create(iphone_11()).unwrap();
  store.promotions().create(promotion_draft("Promo")).unwrap();
  store.articles().create(article_draft("Guide")).unwrap();

  assert!(store.products().delete(&product.id).unwrap());
  assert_eq!(store.promotions().list().len(), 1);
  assert_eq!(store.articles().list().len(), 1);
}

#[test]
fn test_iphone_stock_scenario() {
  setup_tracing();
  let (_dir, store) = temp_store();

  let created = store.products().create(iphone_11()).unwrap();
  assert_eq!(created.name, "iPhone 11");
  assert_eq!(created.brand, "Apple");
  assert_eq!(created.price, 8000.0);
  assert_eq!(created.category, Category::SecondHand);
  assert_eq!(created.stock, 3);

  let patch: ProductPatch = serde_json::from_value(serde_json::json!({ "stock": 2 })).unwrap();
  store.products().update(&created.id, patch).unwrap();

  let fetched = store.products().get(&created.id).unwrap();
  assert_eq!(fetched.stock, 2);
  let mut expected = created;
  expected.stock = 2;
  assert_eq!(fetched, expected);
}

#[test]
fn test_serialized_mode_keeps_every_concurrent_create() {
  setup_tracing();
  let (_dir, store) = temp_store_with_mode(WriteMode::Serialized);
  let store: Arc<DocumentStore> = Arc::new(store);

  let handles: Vec<_> = (0..8)
    .map(|i| {
      let store = Arc::clone(&store);
      thread::spawn(move || {
        for j in 0..5 {
          store.products().create(product_draft(&format!("T{i}-{j}"))).unwrap();
        }
      })
    })
    .collect();
  for handle in handles {
    handle.join().unwrap();
  }

  let products = store.products().list();
  assert_eq!(products.len(), 40);
  let ids: HashSet<&str> = products.iter().map(|p| p.id()).collect();
  assert_eq!(ids.len(), 40);
}

#[test]
fn test_unsynchronized_concurrent_creates_never_fail() {
  setup_tracing();
  let (dir, store) = temp_store();
  let store: Arc<DocumentStore> = Arc::new(store);

  let handles: Vec<_> = (0..8)
    .map(|i| {
      let store = Arc::clone(&store);
      thread::spawn(move || {
        (0..25)
          .filter_map(|j| store.products().create(product_draft(&format!("U{i}-{j}"))).err())
          .map(|e| e.to_string())
          .collect::<Vec<String>>()
      })
    })
    .collect();
  let errors: Vec<String> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
  assert!(errors.is_empty(), "overlapping saves failed: {:?}", errors);

  // Lost updates are allowed in this mode; a torn or unreadable file is not.
  let raw = std::fs::read_to_string(data_path(&dir)).unwrap();
  let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
  let stored = value["products"].as_array().unwrap().len();
  assert!((1..=200).contains(&stored));
  assert_eq!(store.products().list().len(), stored);

  let leftovers: Vec<String> = std::fs::read_dir(dir.path())
    .unwrap()
    .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
    .filter(|name| name != "data.json")
    .collect();
  assert!(leftovers.is_empty(), "temp files left behind: {:?}", leftovers);
}
