// storefront/core/src/readiness.rs

//! Startup readiness for the services.
//!
//! Storage initialization (schema creation, seeding) runs in a background task
//! with bounded retry while the HTTP server is already listening; the health
//! endpoint reports the state machine instead of the process blocking until the
//! database is up.

use crate::error::{AppError, Result};
use actix_web::HttpResponse;
use parking_lot::RwLock;
use serde_json::json;
use sqlx::PgPool;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, warn};

/// Attempts before the service declares itself unready for good.
pub const INIT_MAX_ATTEMPTS: u32 = 40;
/// Fixed backoff between initialization attempts.
pub const INIT_RETRY_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
  Initializing,
  Ready,
  Failed,
}

impl Readiness {
  pub fn as_str(self) -> &'static str {
    match self {
      Readiness::Initializing => "initializing",
      Readiness::Ready => "ok",
      Readiness::Failed => "failed",
    }
  }
}

/// Shared readiness cell. `Initializing` is the only state with outgoing
/// transitions; `Ready` and `Failed` are terminal.
#[derive(Clone)]
pub struct ReadinessState {
  inner: Arc<RwLock<Readiness>>,
}

impl ReadinessState {
  pub fn new() -> Self {
    Self {
      inner: Arc::new(RwLock::new(Readiness::Initializing)),
    }
  }

  pub fn current(&self) -> Readiness {
    *self.inner.read()
  }

  pub fn mark_ready(&self) {
    self.transition(Readiness::Ready);
  }

  pub fn mark_failed(&self) {
    self.transition(Readiness::Failed);
  }

  fn transition(&self, next: Readiness) {
    let mut guard = self.inner.write();
    match *guard {
      Readiness::Initializing => *guard = next,
      current if current == next => {}
      current => warn!(?current, ?next, "ignoring readiness transition out of a terminal state"),
    }
  }
}

impl Default for ReadinessState {
  fn default() -> Self {
    Self::new()
  }
}

/// Health body for a service: 200 once storage is initialized, 503 before
/// (and after a permanent failure).
pub fn health_response(service: &str, readiness: Readiness) -> HttpResponse {
  let body = json!({"status": readiness.as_str(), "service": service});
  match readiness {
    Readiness::Ready => HttpResponse::Ok().json(body),
    Readiness::Initializing | Readiness::Failed => HttpResponse::ServiceUnavailable().json(body),
  }
}

/// Runs `op` until it succeeds, sleeping `delay` between attempts. After
/// `max_attempts` failures the last error is wrapped as `StorageUnavailable`.
pub async fn with_retry<F, Fut>(task: &str, max_attempts: u32, delay: Duration, mut op: F) -> Result<()>
where
  F: FnMut() -> Fut,
  Fut: Future<Output = Result<()>>,
{
  let mut attempt: u32 = 0;
  loop {
    attempt += 1;
    match op().await {
      Ok(()) => return Ok(()),
      Err(err) if attempt < max_attempts => {
        warn!(%err, attempt, max_attempts, task, "storage not ready yet, retrying");
        tokio::time::sleep(delay).await;
      }
      Err(err) => {
        error!(%err, attempt, task, "storage initialization failed permanently");
        return Err(AppError::StorageUnavailable(format!(
          "{} failed after {} attempts: {}",
          task, attempt, err
        )));
      }
    }
  }
}

/// Executes each DDL statement in order against the pool.
pub async fn apply_schema(pool: &PgPool, statements: &[&str]) -> Result<()> {
  for statement in statements {
    sqlx::query(statement).execute(pool).await?;
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::http::StatusCode;
  use std::sync::atomic::{AtomicU32, Ordering};

  #[test]
  fn starts_initializing_and_reaches_ready() {
    let state = ReadinessState::new();
    assert_eq!(state.current(), Readiness::Initializing);
    state.mark_ready();
    assert_eq!(state.current(), Readiness::Ready);
  }

  #[test]
  fn terminal_states_do_not_transition() {
    let state = ReadinessState::new();
    state.mark_failed();
    state.mark_ready();
    assert_eq!(state.current(), Readiness::Failed);

    let state = ReadinessState::new();
    state.mark_ready();
    state.mark_failed();
    assert_eq!(state.current(), Readiness::Ready);
  }

  #[test]
  fn health_codes_follow_readiness() {
    assert_eq!(health_response("orders", Readiness::Ready).status(), StatusCode::OK);
    assert_eq!(
      health_response("orders", Readiness::Initializing).status(),
      StatusCode::SERVICE_UNAVAILABLE
    );
    assert_eq!(
      health_response("orders", Readiness::Failed).status(),
      StatusCode::SERVICE_UNAVAILABLE
    );
  }

  #[tokio::test]
  async fn retry_recovers_after_transient_failures() {
    let calls = AtomicU32::new(0);
    let result = with_retry("test-init", 5, Duration::from_millis(1), || {
      let n = calls.fetch_add(1, Ordering::SeqCst);
      async move {
        if n < 2 {
          Err(AppError::Internal("not yet".to_string()))
        } else {
          Ok(())
        }
      }
    })
    .await;
    assert!(result.is_ok());
    assert_eq!(calls.load(Ordering::SeqCst), 3);
  }

  #[tokio::test]
  async fn retry_gives_up_after_max_attempts() {
    let calls = AtomicU32::new(0);
    let result = with_retry("test-init", 3, Duration::from_millis(1), || {
      calls.fetch_add(1, Ordering::SeqCst);
      async { Err(AppError::Internal("still down".to_string())) }
    })
    .await;
    assert!(matches!(result, Err(AppError::StorageUnavailable(_))));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
  }
}
