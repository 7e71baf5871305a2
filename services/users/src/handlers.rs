// storefront/services/users/src/handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::auth;
use crate::models::{LoginRequest, RegisterRequest};
use crate::state::AppState;
use storefront_core::{health_response, AppError};

pub async fn health_handler(app_state: web::Data<AppState>) -> HttpResponse {
  health_response("users", app_state.readiness.current())
}

#[instrument(name = "handler::register", skip(app_state, payload), fields(email = %payload.email))]
pub async fn register_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
  if payload.name.is_empty() || payload.email.is_empty() || payload.password.is_empty() {
    return Err(AppError::Validation("name, email, password required".to_string()));
  }

  let password_hash = auth::hash_password(&payload.password)?;

  let user_id: i32 = sqlx::query_scalar("INSERT INTO users(name, email, password_hash) VALUES($1, $2, $3) RETURNING id")
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(password_hash)
    .fetch_one(&app_state.db_pool)
    .await
    .map_err(|err| {
      if err
        .as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
      {
        AppError::Conflict("email already registered".to_string())
      } else {
        AppError::Sqlx(err)
      }
    })?;

  info!(user_id, "user registered");
  Ok(HttpResponse::Ok().json(json!({"message": "registered", "user_id": user_id})))
}

#[instrument(name = "handler::login", skip(app_state, payload), fields(email = %payload.email))]
pub async fn login_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
  let row: Option<(i32, String)> = sqlx::query_as("SELECT id, password_hash FROM users WHERE email = $1")
    .bind(&payload.email)
    .fetch_optional(&app_state.db_pool)
    .await?;

  let Some((user_id, password_hash)) = row else {
    warn!("login attempt for unknown email");
    return Err(AppError::Auth("invalid credentials".to_string()));
  };

  if !auth::verify_password(&password_hash, &payload.password)? {
    warn!(user_id, "login attempt with wrong password");
    return Err(AppError::Auth("invalid credentials".to_string()));
  }

  let token = Uuid::new_v4().to_string();
  sqlx::query("INSERT INTO tokens(token, user_id) VALUES($1, $2)")
    .bind(&token)
    .bind(user_id)
    .execute(&app_state.db_pool)
    .await?;

  info!(user_id, "login succeeded");
  Ok(HttpResponse::Ok().json(json!({"token": token, "user_id": user_id})))
}
