// storefront/services/catalog/src/models.rs

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
  pub id: i32,
  pub name: String,
  pub price: Decimal,
  pub image: Option<String>,
}
