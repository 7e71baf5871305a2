// storefront/services/catalog/src/storage.rs

use sqlx::PgPool;
use storefront_core::{
  apply_schema, with_retry, ReadinessState, Result, INIT_MAX_ATTEMPTS, INIT_RETRY_DELAY,
};
use tracing::{error, info};

pub const SCHEMA: &[&str] = &[r#"
  CREATE TABLE IF NOT EXISTS products(
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    price NUMERIC(10,2) NOT NULL,
    image TEXT
  )
  "#];

/// Seeds the demo assortment once, on an empty table only.
async fn seed_products(pool: &PgPool) -> Result<()> {
  let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products").fetch_one(pool).await?;
  if count > 0 {
    return Ok(());
  }

  sqlx::query(
    "INSERT INTO products(name, price, image) VALUES
       ('Men T-Shirt', 1199.00, '🧥'),
       ('Men Hoodie', 2999.00, '🧶'),
       ('Kids Hoodie', 2399.00, '🧒'),
       ('Jogger Pants', 1799.00, '👖'),
       ('Sneakers', 4499.00, '👟')",
  )
  .execute(pool)
  .await?;

  info!("seeded product catalog");
  Ok(())
}

/// Creates and seeds the `products` table with bounded retry, then drives the
/// readiness machine to its terminal state.
pub async fn init_storage(pool: PgPool, readiness: ReadinessState) {
  let result = with_retry("catalog storage init", INIT_MAX_ATTEMPTS, INIT_RETRY_DELAY, || {
    let pool = pool.clone();
    async move {
      apply_schema(&pool, SCHEMA).await?;
      seed_products(&pool).await
    }
  })
  .await;

  match result {
    Ok(()) => {
      info!("catalog storage initialized");
      readiness.mark_ready();
    }
    Err(err) => {
      error!(%err, "catalog storage initialization failed");
      readiness.mark_failed();
    }
  }
}
