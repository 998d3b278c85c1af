//! HTTP facade for building sweep transactions.
//!
//! Endpoints:
//! - `POST /tx` — given `{"wallet": "<address>"}`, return the base64 unsigned
//!   message that moves the wallet's spendable balance to the configured
//!   recipient
//! - `GET /` — the bundled front-end page

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod sweep;

pub use config::SweepConfig;
pub use error::{RpcError, SweepError};
pub use server::{router, AppState, RpcServer};
pub use sweep::{build_sweep, LedgerSnapshot, SweepPlan};
