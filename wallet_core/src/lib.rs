//! Wallet-side logic for sweeping an account.
//!
//! - Send-amount arithmetic (balance minus fee, rent minimum and buffer)
//! - Building the fee-probe and real transfer messages
//! - The [`LedgerClient`] seam over the ledger node's read queries
//! - [`NodeClient`], the `RpcClient`-backed implementation of that seam

pub mod balance;
pub mod error;
pub mod ledger;
pub mod node_client;
pub mod transaction_builder;

pub use balance::{compute_send_amount, SAFETY_BUFFER_LAMPORTS};
pub use error::ClientError;
pub use ledger::{ClientResult, LedgerClient, LedgerQuery};
pub use node_client::NodeClient;
