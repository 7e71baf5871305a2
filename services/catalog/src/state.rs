// storefront/services/catalog/src/state.rs

use sqlx::PgPool;
use storefront_core::ReadinessState;

#[derive(Clone)]
pub struct AppState {
  pub db_pool: PgPool,
  pub readiness: ReadinessState,
}
