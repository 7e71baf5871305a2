// storefront/services/cart/src/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CartItem {
  pub product_id: i32,
  pub qty: i32,
}

fn default_qty() -> i32 {
  1
}

#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
  #[serde(default)]
  pub user_id: i32,
  #[serde(default)]
  pub product_id: i32,
  #[serde(default = "default_qty")]
  pub qty: i32,
}

#[derive(Debug, Deserialize)]
pub struct ClearCartRequest {
  pub user_id: i32,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn qty_defaults_to_one() {
    let req: AddToCartRequest = serde_json::from_str(r#"{"user_id":1,"product_id":2}"#).unwrap();
    assert_eq!(req.qty, 1);
  }

  #[test]
  fn missing_ids_default_to_zero_for_validation() {
    let req: AddToCartRequest = serde_json::from_str(r#"{"qty":3}"#).unwrap();
    assert_eq!(req.user_id, 0);
    assert_eq!(req.product_id, 0);
    assert_eq!(req.qty, 3);
  }
}
