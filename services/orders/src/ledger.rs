// storefront/services/orders/src/ledger.rs

//! Order Ledger: the durable store of orders and their lines.

use crate::models::{Order, OrderLine, OrderView};
use crate::pricing::PricedLine;
use rust_decimal::Decimal;
use sqlx::PgPool;
use storefront_core::Result;
use tracing::{info, instrument};

/// Outcome of a successful write: the ledger-assigned id is the sole external
/// handle to the order from here on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedOrder {
  pub order_id: i32,
  pub total: Decimal,
}

/// `total == Σ unit_price × qty`, in decimal arithmetic. Intermediate
/// products keep the catalog's two-digit scale exactly.
pub fn order_total(lines: &[PricedLine]) -> Decimal {
  lines.iter().map(|l| l.unit_price * Decimal::from(l.qty)).sum()
}

#[derive(Clone)]
pub struct OrderLedger {
  pool: PgPool,
}

impl OrderLedger {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  /// Writes the order header and all its lines in one transaction: either the
  /// order with its full line set becomes visible, or nothing does. The id is
  /// assigned by the `orders` serial; `created_at` is commit time.
  #[instrument(name = "ledger::place", skip(self, lines), fields(user_id = user_id, line_count = lines.len()))]
  pub async fn place(&self, user_id: i32, lines: &[PricedLine]) -> Result<PlacedOrder> {
    let total = order_total(lines);

    let mut tx = self.pool.begin().await?;

    let order_id: i32 = sqlx::query_scalar("INSERT INTO orders(user_id, total) VALUES($1, $2) RETURNING id")
      .bind(user_id)
      .bind(total)
      .fetch_one(&mut *tx)
      .await?;

    for line in lines {
      sqlx::query("INSERT INTO order_items(order_id, product_id, qty, unit_price) VALUES($1, $2, $3, $4)")
        .bind(order_id)
        .bind(line.product_id)
        .bind(line.qty)
        .bind(line.unit_price)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    info!(order_id, %total, "order committed");
    Ok(PlacedOrder { order_id, total })
  }

  /// Reconstructs an order with its lines in original insertion order.
  /// `None` when the id is unknown; never a partial record.
  #[instrument(name = "ledger::get", skip(self))]
  pub async fn get(&self, order_id: i32) -> Result<Option<OrderView>> {
    let header: Option<Order> =
      sqlx::query_as("SELECT id, user_id, total, created_at FROM orders WHERE id = $1")
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?;

    let Some(header) = header else {
      return Ok(None);
    };

    let items: Vec<OrderLine> =
      sqlx::query_as("SELECT product_id, qty, unit_price FROM order_items WHERE order_id = $1 ORDER BY id")
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

    Ok(Some(OrderView {
      id: header.id,
      user_id: header.user_id,
      total: header.total,
      created_at: header.created_at,
      items,
    }))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  fn priced(product_id: i32, qty: i32, unit_price: Decimal) -> PricedLine {
    PricedLine {
      product_id,
      qty,
      unit_price,
    }
  }

  #[test]
  fn total_is_sum_of_price_times_qty() {
    let lines = vec![priced(1, 2, dec!(1199.00))];
    assert_eq!(order_total(&lines), dec!(2398.00));
  }

  #[test]
  fn total_keeps_two_digit_scale_across_lines() {
    let lines = vec![
      priced(1, 3, dec!(19.99)),
      priced(2, 1, dec!(0.01)),
      priced(3, 2, dec!(1799.00)),
    ];
    assert_eq!(order_total(&lines), dec!(3657.98));
  }

  #[test]
  fn empty_lines_total_zero() {
    assert_eq!(order_total(&[]), Decimal::ZERO);
  }
}
