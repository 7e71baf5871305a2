// storefront/services/orders/src/state.rs

use crate::catalog::CatalogStore;
use crate::ledger::OrderLedger;
use crate::workflow::OrderPlacement;
use std::sync::Arc;
use storefront_core::ReadinessState;

#[derive(Clone)]
pub struct AppState {
  pub placement: Arc<OrderPlacement<CatalogStore>>,
  pub ledger: OrderLedger,
  pub readiness: ReadinessState,
}
