//! Read-only queries against a ledger node.

use async_trait::async_trait;
use solana_sdk::hash::Hash;
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use std::fmt;

use crate::ClientError;

/// `Ok(None)` is an empty/absent result; `Err` is a transport or RPC fault.
pub type ClientResult<T> = Result<Option<T>, ClientError>;

/// The four lookups a sweep needs from the ledger.
///
/// Implementations must be shareable across request tasks.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Balance of `address`, in lamports.
    async fn get_balance(&self, address: &Pubkey) -> ClientResult<u64>;

    /// Most recent blockhash to anchor a transaction to.
    async fn get_latest_blockhash(&self) -> ClientResult<Hash>;

    /// Fee the network would charge for `message`.
    async fn get_fee_for_message(&self, message: &Message) -> ClientResult<u64>;

    /// Minimum balance for an account holding `data_len` bytes to be exempt
    /// from rent collection.
    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize)
        -> ClientResult<u64>;
}

/// Which ledger lookup an outcome belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LedgerQuery {
    Balance,
    LatestBlockhash,
    FeeForMessage,
    RentExemption,
}

impl LedgerQuery {
    /// JSON-RPC method name on the node.
    pub fn method(&self) -> &'static str {
        match self {
            Self::Balance => "getBalance",
            Self::LatestBlockhash => "getLatestBlockhash",
            Self::FeeForMessage => "getFeeForMessage",
            Self::RentExemption => "getMinimumBalanceForRentExemption",
        }
    }

    /// Caller-facing description of this lookup failing.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Balance => "Failed to fetch balance",
            Self::LatestBlockhash => "Failed to fetch blockhash",
            Self::FeeForMessage => "Failed to estimate fee",
            Self::RentExemption => "Failed to fetch rent exemption minimum",
        }
    }
}

impl fmt::Display for LedgerQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method())
    }
}
