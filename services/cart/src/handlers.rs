// storefront/services/cart/src/handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::models::{AddToCartRequest, CartItem, ClearCartRequest};
use crate::state::AppState;
use storefront_core::{health_response, AppError};

pub async fn health_handler(app_state: web::Data<AppState>) -> HttpResponse {
  health_response("cart", app_state.readiness.current())
}

#[instrument(
  name = "handler::add_to_cart",
  skip(app_state, payload),
  fields(user_id = payload.user_id, product_id = payload.product_id, qty = payload.qty)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<AddToCartRequest>,
) -> Result<HttpResponse, AppError> {
  if payload.user_id == 0 || payload.product_id == 0 {
    return Err(AppError::Validation("user_id and product_id required".to_string()));
  }

  // The cart row upsert and the item append commit together.
  let mut tx = app_state.db_pool.begin().await?;
  sqlx::query("INSERT INTO carts(user_id) VALUES($1) ON CONFLICT DO NOTHING")
    .bind(payload.user_id)
    .execute(&mut *tx)
    .await?;
  sqlx::query("INSERT INTO cart_items(user_id, product_id, qty) VALUES($1, $2, $3)")
    .bind(payload.user_id)
    .bind(payload.product_id)
    .bind(payload.qty)
    .execute(&mut *tx)
    .await?;
  tx.commit().await?;

  info!(user_id = payload.user_id, product_id = payload.product_id, "cart item added");
  Ok(HttpResponse::Ok().json(json!({"message": "added"})))
}

#[instrument(name = "handler::get_cart", skip(app_state, path))]
pub async fn get_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
  let user_id = path.into_inner();

  let items: Vec<CartItem> =
    sqlx::query_as("SELECT product_id, qty FROM cart_items WHERE user_id = $1 ORDER BY id")
      .bind(user_id)
      .fetch_all(&app_state.db_pool)
      .await?;

  Ok(HttpResponse::Ok().json(json!({"user_id": user_id, "items": items})))
}

#[instrument(name = "handler::clear_cart", skip(app_state, payload), fields(user_id = payload.user_id))]
pub async fn clear_cart_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<ClearCartRequest>,
) -> Result<HttpResponse, AppError> {
  sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
    .bind(payload.user_id)
    .execute(&app_state.db_pool)
    .await?;

  info!(user_id = payload.user_id, "cart cleared");
  Ok(HttpResponse::Ok().json(json!({"message": "cleared"})))
}
