// storefront/services/orders/src/pricing.rs

//! Pricing Resolver: turns requested (product, qty) lines into priced lines.

use crate::catalog::ProductSource;
use crate::models::OrderItemRequest;
use rust_decimal::Decimal;
use storefront_core::{AppError, Result};
use tracing::{debug, warn};

/// A request line with the unit price captured at resolution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedLine {
  pub product_id: i32,
  pub qty: i32,
  pub unit_price: Decimal,
}

pub struct PricingResolver<S> {
  source: S,
}

impl<S: ProductSource> PricingResolver<S> {
  pub fn new(source: S) -> Self {
    Self { source }
  }

  /// Resolves every line, in request order, against the catalog.
  ///
  /// Fails fast on the first unknown product id: no partial result is
  /// returned and nothing has been written. Each lookup reads whatever price
  /// is visible at that moment; a single resolution pass is not a consistent
  /// snapshot across lines.
  pub async fn resolve(&self, lines: &[OrderItemRequest]) -> Result<Vec<PricedLine>> {
    let mut priced = Vec::with_capacity(lines.len());
    for line in lines {
      match self.source.get_product(line.product_id).await? {
        Some(product) => {
          debug!(product_id = line.product_id, price = %product.price, "resolved product price");
          priced.push(PricedLine {
            product_id: line.product_id,
            qty: line.qty,
            unit_price: product.price,
          });
        }
        None => {
          warn!(product_id = line.product_id, "unknown product in order request");
          return Err(AppError::NotFound(format!("product {} not found", line.product_id)));
        }
      }
    }
    Ok(priced)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::CatalogProduct;
  use async_trait::async_trait;
  use rust_decimal_macros::dec;
  use std::collections::HashMap;

  struct FakeCatalog(HashMap<i32, CatalogProduct>);

  impl FakeCatalog {
    fn with_prices(prices: &[(i32, Decimal)]) -> Self {
      Self(
        prices
          .iter()
          .map(|(id, price)| {
            (
              *id,
              CatalogProduct {
                name: format!("product-{}", id),
                price: *price,
              },
            )
          })
          .collect(),
      )
    }
  }

  #[async_trait]
  impl ProductSource for FakeCatalog {
    async fn get_product(&self, product_id: i32) -> Result<Option<CatalogProduct>> {
      Ok(self.0.get(&product_id).cloned())
    }
  }

  fn line(product_id: i32, qty: i32) -> OrderItemRequest {
    OrderItemRequest { product_id, qty }
  }

  #[tokio::test]
  async fn resolves_in_request_order_with_snapshot_prices() {
    let resolver = PricingResolver::new(FakeCatalog::with_prices(&[
      (1, dec!(1199.00)),
      (2, dec!(2999.00)),
      (5, dec!(4499.00)),
    ]));

    let priced = resolver.resolve(&[line(5, 1), line(1, 2), line(2, 3)]).await.unwrap();

    assert_eq!(
      priced,
      vec![
        PricedLine {
          product_id: 5,
          qty: 1,
          unit_price: dec!(4499.00)
        },
        PricedLine {
          product_id: 1,
          qty: 2,
          unit_price: dec!(1199.00)
        },
        PricedLine {
          product_id: 2,
          qty: 3,
          unit_price: dec!(2999.00)
        },
      ]
    );
  }

  #[tokio::test]
  async fn unknown_product_fails_fast_naming_the_id() {
    let resolver = PricingResolver::new(FakeCatalog::with_prices(&[(1, dec!(1199.00))]));

    let err = resolver.resolve(&[line(1, 1), line(999, 1), line(1, 1)]).await.unwrap_err();

    match err {
      AppError::NotFound(msg) => assert_eq!(msg, "product 999 not found"),
      other => panic!("expected NotFound, got {:?}", other),
    }
  }

  #[tokio::test]
  async fn empty_input_resolves_to_empty() {
    let resolver = PricingResolver::new(FakeCatalog::with_prices(&[]));
    let priced = resolver.resolve(&[]).await.unwrap();
    assert!(priced.is_empty());
  }
}
