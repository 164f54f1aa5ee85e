// vantablack_server/src/errors.rs

use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;
use vantablack::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  /// A write to the document failed. `action` names what the client asked
  /// for ("create product"); the source never reaches the client.
  #[error("Storage Error while trying to {action}: {source}")]
  Storage {
    action: String,
    #[source]
    source: StoreError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String), // For miscellaneous errors
}

impl AppError {
  pub fn storage(action: impl Into<String>, source: StoreError) -> Self {
    AppError::Storage {
      action: action.into(),
      source,
    }
  }
}

// The blocking pool is only gone when the server is shutting down.
impl From<BlockingError> for AppError {
  fn from(err: BlockingError) -> Self {
    AppError::Internal(err.to_string())
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Storage { .. } | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    match self {
      AppError::Validation(_) | AppError::NotFound(_) => {
        tracing::warn!(application_error = %self, "Responding with error");
      }
      _ => tracing::error!(application_error = %self, "Responding with error"),
    }
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      AppError::Storage { action, .. } => {
        HttpResponse::InternalServerError().json(json!({"error": format!("Failed to {}", action)}))
      }
      AppError::Config(_) | AppError::Internal(_) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred"}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
