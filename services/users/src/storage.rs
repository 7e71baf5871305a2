// storefront/services/users/src/storage.rs

use sqlx::PgPool;
use storefront_core::{apply_schema, with_retry, ReadinessState, INIT_MAX_ATTEMPTS, INIT_RETRY_DELAY};
use tracing::{error, info};

pub const SCHEMA: &[&str] = &[
  r#"
  CREATE TABLE IF NOT EXISTS users(
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT UNIQUE NOT NULL,
    password_hash TEXT NOT NULL
  )
  "#,
  r#"
  CREATE TABLE IF NOT EXISTS tokens(
    token TEXT PRIMARY KEY,
    user_id INT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
  )
  "#,
];

pub async fn init_storage(pool: PgPool, readiness: ReadinessState) {
  let result = with_retry("users storage init", INIT_MAX_ATTEMPTS, INIT_RETRY_DELAY, || {
    let pool = pool.clone();
    async move { apply_schema(&pool, SCHEMA).await }
  })
  .await;

  match result {
    Ok(()) => {
      info!("users storage initialized");
      readiness.mark_ready();
    }
    Err(err) => {
      error!(%err, "users storage initialization failed");
      readiness.mark_failed();
    }
  }
}
