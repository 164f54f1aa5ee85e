// vantablack_server/src/web/handlers/article_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{instrument, warn};
use vantablack::{Article, Record};

use crate::errors::AppError;
use crate::state::AppState;

/// The article body split into headings, paragraphs and lists.
#[instrument(name = "handler::article_blocks", skip(app_state, path), fields(id = %path.as_ref()))]
pub async fn article_blocks_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  let store = app_state.store.clone();

  let article = web::block(move || store.articles().get(&id)).await?.ok_or_else(|| {
    warn!("Article not found.");
    AppError::NotFound(format!("{} not found", Article::LABEL))
  })?;

  Ok(HttpResponse::Ok().json(json!({
      "id": article.id,
      "title": article.title,
      "blocks": article.blocks()
  })))
}
