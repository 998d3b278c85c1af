//! Nullable infrastructure for deterministic testing.
//!
//! The ledger node is the only external dependency of the sweep service and
//! sits behind the [`LedgerClient`](sweep_wallet_core::LedgerClient) trait.
//! This crate provides a test-friendly implementation that:
//! - Returns scripted values, absences or faults per query
//! - Records every query it receives, in order
//! - Never touches the network

pub mod ledger;

pub use ledger::{NullLedgerClient, Scripted};
