// storefront/services/orders/src/models.rs

//! Entities and the request/response schemas of the order surface.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Order header row. `total` is computed once at placement and frozen; later
/// catalog price changes never alter it.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
  pub id: i32,
  pub user_id: i32,
  pub total: Decimal,
  pub created_at: DateTime<Utc>,
}

/// One priced line of an order. `unit_price` is a snapshot taken at placement,
/// not a reference into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct OrderLine {
  pub product_id: i32,
  pub qty: i32,
  pub unit_price: Decimal,
}

/// Read-path projection: header plus lines in original insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct OrderView {
  pub id: i32,
  pub user_id: i32,
  pub total: Decimal,
  pub created_at: DateTime<Utc>,
  pub items: Vec<OrderLine>,
}

// --- Request DTOs ---

fn default_qty() -> i32 {
  1
}

#[derive(Debug, Deserialize)]
pub struct OrderItemRequest {
  pub product_id: i32,
  #[serde(default = "default_qty")]
  pub qty: i32,
}

/// Body of `POST /order/place`. A missing `items` key is an empty list (and is
/// then rejected by validation); a missing `user_id` is a schema mismatch
/// rejected at the boundary.
#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
  pub user_id: i32,
  #[serde(default)]
  pub items: Vec<OrderItemRequest>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn qty_defaults_to_one() {
    let req: PlaceOrderRequest = serde_json::from_str(r#"{"user_id":1,"items":[{"product_id":3}]}"#).unwrap();
    assert_eq!(req.items.len(), 1);
    assert_eq!(req.items[0].product_id, 3);
    assert_eq!(req.items[0].qty, 1);
  }

  #[test]
  fn missing_items_deserializes_as_empty() {
    let req: PlaceOrderRequest = serde_json::from_str(r#"{"user_id":7}"#).unwrap();
    assert!(req.items.is_empty());
  }

  #[test]
  fn missing_user_id_is_a_schema_error() {
    let result = serde_json::from_str::<PlaceOrderRequest>(r#"{"items":[{"product_id":1,"qty":2}]}"#);
    assert!(result.is_err());
  }

  #[test]
  fn order_view_serializes_exact_decimals() {
    let view = OrderView {
      id: 4,
      user_id: 1,
      total: dec!(2398.00),
      created_at: Utc::now(),
      items: vec![OrderLine {
        product_id: 1,
        qty: 2,
        unit_price: dec!(1199.00),
      }],
    };
    let value = serde_json::to_value(&view).unwrap();
    assert_eq!(value["total"], serde_json::json!("2398.00"));
    assert_eq!(value["items"][0]["unit_price"], serde_json::json!("1199.00"));
    assert_eq!(value["items"][0]["qty"], serde_json::json!(2));
  }
}
