// storefront/services/cart/src/storage.rs

use sqlx::PgPool;
use storefront_core::{apply_schema, with_retry, ReadinessState, INIT_MAX_ATTEMPTS, INIT_RETRY_DELAY};
use tracing::{error, info};

pub const SCHEMA: &[&str] = &[
  r#"
  CREATE TABLE IF NOT EXISTS carts(
    user_id INT PRIMARY KEY
  )
  "#,
  r#"
  CREATE TABLE IF NOT EXISTS cart_items(
    id SERIAL PRIMARY KEY,
    user_id INT NOT NULL,
    product_id INT NOT NULL,
    qty INT NOT NULL
  )
  "#,
];

pub async fn init_storage(pool: PgPool, readiness: ReadinessState) {
  let result = with_retry("cart storage init", INIT_MAX_ATTEMPTS, INIT_RETRY_DELAY, || {
    let pool = pool.clone();
    async move { apply_schema(&pool, SCHEMA).await }
  })
  .await;

  match result {
    Ok(()) => {
      info!("cart storage initialized");
      readiness.mark_ready();
    }
    Err(err) => {
      error!(%err, "cart storage initialization failed");
      readiness.mark_failed();
    }
  }
}
