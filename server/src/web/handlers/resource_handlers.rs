// vantablack_server/src/web/handlers/resource_handlers.rs

//! List/create/get/update/delete handlers shared by every collection.
//! Each is instantiated per record type in `routes.rs`.

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument, warn};
use vantablack::Record;

use crate::errors::AppError;
use crate::state::AppState;

fn not_found<R: Record>() -> AppError {
  AppError::NotFound(format!("{} not found", R::LABEL))
}

fn singular<R: Record>() -> String {
  R::LABEL.to_lowercase()
}

#[instrument(name = "handler::list_records", skip_all, fields(collection = R::COLLECTION))]
pub async fn list_records<R: Record>(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let store = app_state.store.clone();
  let records = web::block(move || store.collection::<R>().list()).await?;

  info!("Fetched {} {}.", records.len(), R::COLLECTION);
  Ok(HttpResponse::Ok().json(records))
}

#[instrument(name = "handler::create_record", skip_all, fields(collection = R::COLLECTION))]
pub async fn create_record<R: Record>(
  app_state: web::Data<AppState>,
  payload: web::Json<R::Draft>,
) -> Result<HttpResponse, AppError> {
  let store = app_state.store.clone();
  let draft = payload.into_inner();

  let record = web::block(move || store.collection::<R>().create(draft))
    .await?
    .map_err(|e| AppError::storage(format!("create {}", singular::<R>()), e))?;

  info!(id = record.id(), "{} created.", R::LABEL);
  Ok(HttpResponse::Created().json(record))
}

#[instrument(name = "handler::get_record", skip(app_state, path), fields(collection = R::COLLECTION, id = %path.as_ref()))]
pub async fn get_record<R: Record>(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  let store = app_state.store.clone();

  match web::block(move || store.collection::<R>().get(&id)).await? {
    Some(record) => Ok(HttpResponse::Ok().json(record)),
    None => {
      warn!("{} not found.", R::LABEL);
      Err(not_found::<R>())
    }
  }
}

#[instrument(name = "handler::update_record", skip(app_state, path, payload), fields(collection = R::COLLECTION, id = %path.as_ref()))]
pub async fn update_record<R: Record>(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: web::Json<R::Patch>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  let patch = payload.into_inner();
  let store = app_state.store.clone();

  let updated = web::block(move || store.collection::<R>().update(&id, patch))
    .await?
    .map_err(|e| AppError::storage(format!("update {}", singular::<R>()), e))?;

  match updated {
    Some(record) => {
      info!("{} updated.", R::LABEL);
      Ok(HttpResponse::Ok().json(record))
    }
    None => {
      warn!("{} not found for update.", R::LABEL);
      Err(not_found::<R>())
    }
  }
}

#[instrument(name = "handler::delete_record", skip(app_state, path), fields(collection = R::COLLECTION, id = %path.as_ref()))]
pub async fn delete_record<R: Record>(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  let store = app_state.store.clone();

  let removed = web::block(move || store.collection::<R>().delete(&id))
    .await?
    .map_err(|e| AppError::storage(format!("delete {}", singular::<R>()), e))?;

  if !removed {
    warn!("{} not found for delete.", R::LABEL);
    return Err(not_found::<R>());
  }
  info!("{} deleted.", R::LABEL);
  Ok(HttpResponse::Ok().json(json!({ "success": true })))
}
