//! The sweep pipeline: four ledger reads, one subtraction, one message.
//!
//! Reads run strictly in order (balance, blockhash, fee, rent) and the first
//! failure aborts the rest. Nothing is written to the ledger, so an aborted
//! sweep needs no cleanup. Balance, blockhash and rent do not depend on each
//! other and could be fetched concurrently; the fee quote needs the blockhash.

use solana_sdk::hash::Hash;
use solana_sdk::pubkey::{ParsePubkeyError, Pubkey};
use sweep_wallet_core::transaction_builder::{
    build_fee_probe_message, build_transfer_message, encode_message_base64,
};
use sweep_wallet_core::{compute_send_amount, ClientResult, LedgerClient, LedgerQuery};
use tracing::debug;

use crate::{SweepConfig, SweepError};

/// Point-in-time ledger values one sweep was computed from.
///
/// The four reads are independent; nothing guarantees they observe the same
/// slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub balance: u64,
    pub blockhash: Hash,
    pub fee: u64,
    pub rent_exempt_minimum: u64,
}

/// A built, unsigned sweep.
#[derive(Clone, Debug)]
pub struct SweepPlan {
    pub sender: Pubkey,
    pub recipient: Pubkey,
    pub snapshot: LedgerSnapshot,
    pub send_amount: u64,
    /// Base64 of the serialized message.
    pub transaction: String,
}

/// Build the sweep transaction for `wallet`.
///
/// A missing or unparsable wallet fails before any ledger query is made.
pub async fn build_sweep(
    client: &dyn LedgerClient,
    config: &SweepConfig,
    wallet: Option<&str>,
) -> Result<SweepPlan, SweepError> {
    let sender = parse_wallet(wallet)?;

    let balance = required(LedgerQuery::Balance, client.get_balance(&sender).await)?;
    debug!(%sender, balance, "fetched balance");

    let blockhash = required(LedgerQuery::LatestBlockhash, client.get_latest_blockhash().await)?;
    debug!(%blockhash, "fetched latest blockhash");

    let probe = build_fee_probe_message(&sender, &blockhash);
    let fee = required(
        LedgerQuery::FeeForMessage,
        client.get_fee_for_message(&probe).await,
    )?;
    debug!(fee, "fetched fee quote");

    let rent_exempt_minimum = required(
        LedgerQuery::RentExemption,
        client.get_minimum_balance_for_rent_exemption(0).await,
    )?;
    debug!(rent_exempt_minimum, "fetched rent exemption minimum");

    let snapshot = LedgerSnapshot {
        balance,
        blockhash,
        fee,
        rent_exempt_minimum,
    };

    let send_amount = compute_send_amount(balance, fee, rent_exempt_minimum, config.safety_buffer)
        .ok_or(SweepError::InsufficientFunds {
            balance,
            fee,
            rent_exempt_minimum,
            buffer: config.safety_buffer,
        })?;

    let message = build_transfer_message(&sender, &config.recipient, send_amount, &blockhash);
    let transaction = encode_message_base64(&message);

    Ok(SweepPlan {
        sender,
        recipient: config.recipient,
        snapshot,
        send_amount,
        transaction,
    })
}

fn parse_wallet(wallet: Option<&str>) -> Result<Pubkey, SweepError> {
    match wallet {
        None | Some("") => Err(SweepError::MissingWallet),
        Some(s) => s
            .parse()
            .map_err(|e: ParsePubkeyError| SweepError::InvalidWallet(e.to_string())),
    }
}

/// Absent and failed results are the same upstream failure for `query`.
fn required<T>(query: LedgerQuery, outcome: ClientResult<T>) -> Result<T, SweepError> {
    match outcome {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Err(SweepError::Upstream {
            query,
            detail: None,
        }),
        Err(e) => Err(SweepError::Upstream {
            query,
            detail: Some(e),
        }),
    }
}
