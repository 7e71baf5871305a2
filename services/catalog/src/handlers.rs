// storefront/services/catalog/src/handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use crate::models::Product;
use crate::state::AppState;
use storefront_core::{health_response, AppError};

pub async fn health_handler(app_state: web::Data<AppState>) -> HttpResponse {
  health_response("catalog", app_state.readiness.current())
}

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products: Vec<Product> = sqlx::query_as("SELECT id, name, price, image FROM products ORDER BY id")
    .fetch_all(&app_state.db_pool)
    .await?;

  info!("Fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  let product: Option<Product> = sqlx::query_as("SELECT id, name, price, image FROM products WHERE id = $1")
    .bind(product_id)
    .fetch_optional(&app_state.db_pool)
    .await?;

  match product {
    Some(product) => Ok(HttpResponse::Ok().json(product)),
    None => Err(AppError::NotFound("not found".to_string())),
  }
}
