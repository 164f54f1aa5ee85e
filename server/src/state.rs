// vantablack_server/src/state.rs
use crate::config::AppConfig;
use std::sync::Arc;
use vantablack::DocumentStore;

#[derive(Clone)]
pub struct AppState {
  pub store: Arc<DocumentStore>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(config: Arc<AppConfig>) -> Self {
    let store = DocumentStore::with_mode(config.data_file.clone(), config.write_mode);
    Self {
      store: Arc::new(store),
      config,
    }
  }
}
