// storefront/services/orders/src/storage.rs

//! Schema for the tables this service owns, plus the background init task.
//!
//! `products` lives in the same database but belongs to the catalog service;
//! it is never created here.

use sqlx::PgPool;
use storefront_core::{apply_schema, with_retry, ReadinessState, INIT_MAX_ATTEMPTS, INIT_RETRY_DELAY};
use tracing::{error, info};

pub const SCHEMA: &[&str] = &[
  r#"
  CREATE TABLE IF NOT EXISTS orders(
    id SERIAL PRIMARY KEY,
    user_id INT NOT NULL,
    total NUMERIC(10,2) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
  )
  "#,
  r#"
  CREATE TABLE IF NOT EXISTS order_items(
    id SERIAL PRIMARY KEY,
    order_id INT NOT NULL REFERENCES orders(id) ON DELETE CASCADE,
    product_id INT NOT NULL,
    qty INT NOT NULL CHECK (qty > 0),
    unit_price NUMERIC(10,2) NOT NULL
  )
  "#,
];

/// Creates the schema with bounded retry and drives the readiness machine to
/// its terminal state. Runs as a spawned task while the server is already
/// accepting requests.
pub async fn init_storage(pool: PgPool, readiness: ReadinessState) {
  let result = with_retry("orders storage init", INIT_MAX_ATTEMPTS, INIT_RETRY_DELAY, || {
    let pool = pool.clone();
    async move { apply_schema(&pool, SCHEMA).await }
  })
  .await;

  match result {
    Ok(()) => {
      info!("orders storage initialized");
      readiness.mark_ready();
    }
    Err(err) => {
      error!(%err, "orders storage initialization failed");
      readiness.mark_failed();
    }
  }
}
