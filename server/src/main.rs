// vantablack_server/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use vantablack_server::web::configure_app_routes;
use vantablack_server::{seed, AppConfig, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting storefront catalogue server...");

  let app_config = AppConfig::from_env().context("loading configuration")?;
  let app_state = AppState::new(Arc::new(app_config));
  let config = app_state.config.clone();

  if config.seed_db {
    let seeded = seed::seed_if_missing(&app_state.store).context("seeding starter catalogue")?;
    tracing::info!(seeded, "Seed step finished.");
  }

  let server_address = config.bind_address();
  tracing::info!(
    data_file = %app_state.store.path().display(),
    write_mode = ?app_state.store.mode(),
    "Attempting to bind server to {}...",
    server_address
  );

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("binding {}", server_address))?
  .run()
  .await
  .context("running HTTP server")
}
