// storefront/core/src/lib.rs

//! Shared service kit for the storefront services.
//!
//! Every service binary pulls the same foundation from here:
//!  - `AppError`, the application error enum with its HTTP response mapping.
//!  - `ServiceConfig`, env-based configuration with the deployment defaults.
//!  - The readiness state machine (`Initializing -> Ready | Failed`) plus the
//!    bounded-retry storage initialization helpers behind it.

pub mod config;
pub mod error;
pub mod readiness;

// --- Re-exports for the Public API ---

pub use crate::config::{DbEnv, ServiceConfig, DB1, DB2};
pub use crate::error::{json_error_handler, path_error_handler, AppError, Result};
pub use crate::readiness::{
  apply_schema, health_response, with_retry, Readiness, ReadinessState, INIT_MAX_ATTEMPTS,
  INIT_RETRY_DELAY,
};
