// vantablack_server/src/web/routes.rs

use actix_web::{web, HttpResponse, Scope};
use vantablack::{Article, Product, Promotion, Record};

use crate::errors::AppError;
use crate::web::handlers::article_handlers::article_blocks_handler;
use crate::web::handlers::resource_handlers::{
  create_record, delete_record, get_record, list_records, update_record,
};

async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// The five collection endpoints for one record type, rooted at `path`.
fn resource_scope<R: Record>(path: &str) -> Scope {
  web::scope(path)
    .route("", web::get().to(list_records::<R>))
    .route("", web::post().to(create_record::<R>))
    .route("/{id}", web::get().to(get_record::<R>))
    .route("/{id}", web::put().to(update_record::<R>))
    .route("/{id}", web::delete().to(delete_record::<R>))
}

fn article_scope(path: &str) -> Scope {
  resource_scope::<Article>(path).route("/{id}/blocks", web::get().to(article_blocks_handler))
}

// Called in `main.rs` (and by the HTTP tests) to configure the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  // Unparseable bodies and missing required fields become a 400 JSON error.
  cfg.app_data(
    web::JsonConfig::default().error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
  );

  cfg.service(
    web::scope("/api")
      .route("/health", web::get().to(health_check_handler))
      .service(resource_scope::<Product>("/products"))
      .service(resource_scope::<Promotion>("/promotions"))
      .service(article_scope("/articles"))
      // Public path the storefront has always used for articles
      .service(article_scope("/knowledge")),
  );
}
