// storefront/core/src/error.rs

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Conflict: {0}")]
  Conflict(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Storage Unavailable: {0}")]
  StorageUnavailable(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::Auth(m) => HttpResponse::Unauthorized().json(json!({"error": m})),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      AppError::Conflict(m) => HttpResponse::Conflict().json(json!({"error": m})),
      AppError::Config(_) => HttpResponse::InternalServerError().json(json!({"error": "configuration issue"})),
      AppError::StorageUnavailable(_) => {
        HttpResponse::ServiceUnavailable().json(json!({"error": "storage unavailable"}))
      }
      // Connection-class failures mean storage is unreachable, not that the
      // request was bad; everything else stays a generic 500 so queries and
      // schema details never leak to clients.
      AppError::Sqlx(sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed) => {
        HttpResponse::ServiceUnavailable().json(json!({"error": "storage unavailable"}))
      }
      AppError::Sqlx(_) => HttpResponse::InternalServerError().json(json!({"error": "database operation failed"})),
      AppError::Internal(_) => HttpResponse::InternalServerError().json(json!({"error": "internal error"})),
    }
  }
}

/// Boundary handler for malformed JSON bodies: schema mismatches are rejected
/// with an `{"error": ...}` body before any business logic runs.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::Validation(err.to_string()).into()
}

/// Boundary handler for path parameters that fail to parse (a non-numeric id
/// is a route miss, same as an unknown one).
pub fn path_error_handler(_err: PathError, _req: &HttpRequest) -> actix_web::Error {
  AppError::NotFound("not found".to_string()).into()
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::http::StatusCode;

  #[test]
  fn validation_maps_to_400() {
    let resp = AppError::Validation("items required".to_string()).error_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[test]
  fn not_found_maps_to_404() {
    let resp = AppError::NotFound("not found".to_string()).error_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[test]
  fn conflict_maps_to_409() {
    let resp = AppError::Conflict("email already registered".to_string()).error_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
  }

  #[test]
  fn connection_class_sqlx_maps_to_503() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    let resp = AppError::Sqlx(sqlx::Error::Io(io)).error_response();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let resp = AppError::Sqlx(sqlx::Error::PoolTimedOut).error_response();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
  }

  #[test]
  fn other_sqlx_maps_to_500() {
    let resp = AppError::Sqlx(sqlx::Error::RowNotFound).error_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn storage_unavailable_maps_to_503() {
    let resp = AppError::StorageUnavailable("db1 init failed".to_string()).error_response();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
  }
}
