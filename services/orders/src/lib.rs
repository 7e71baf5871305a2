// storefront/services/orders/src/lib.rs

//! Order placement service.
//!
//! The placement workflow prices a submitted item list against the catalog's
//! `products` table, writes the order header and its lines as one transaction,
//! and returns the ledger-assigned id with the computed total. Orders are
//! immutable once placed; the read path reconstructs them in line insertion
//! order.

pub mod catalog;
pub mod ledger;
pub mod models;
pub mod pricing;
pub mod state;
pub mod storage;
pub mod web;
pub mod workflow;
