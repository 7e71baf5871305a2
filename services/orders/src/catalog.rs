// storefront/services/orders/src/catalog.rs

//! Read-only access to the Product Catalog Store.
//!
//! The catalog service owns the `products` table; this service only reads it.
//! The lookup is behind a trait so the pricing resolver can be exercised
//! against an in-memory catalog in tests.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use storefront_core::Result;

/// What the catalog exposes per product: name and current unit price.
#[derive(Debug, Clone, FromRow)]
pub struct CatalogProduct {
  pub name: String,
  pub price: Decimal,
}

#[async_trait]
pub trait ProductSource: Send + Sync {
  /// Fresh lookup of a single product; `None` when the id is unknown.
  async fn get_product(&self, product_id: i32) -> Result<Option<CatalogProduct>>;
}

/// Postgres-backed catalog access over the shared db1 pool.
#[derive(Clone)]
pub struct CatalogStore {
  pool: PgPool,
}

impl CatalogStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl ProductSource for CatalogStore {
  async fn get_product(&self, product_id: i32) -> Result<Option<CatalogProduct>> {
    let product = sqlx::query_as::<_, CatalogProduct>("SELECT name, price FROM products WHERE id = $1")
      .bind(product_id)
      .fetch_optional(&self.pool)
      .await?;
    Ok(product)
  }
}
