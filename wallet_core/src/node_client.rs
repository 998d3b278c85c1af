//! Ledger node access through the Solana RPC client.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::json;
use solana_client::client_error::{ClientError as RpcClientError, ClientErrorKind};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_request::{RpcError, RpcRequest};
use solana_client::rpc_response::Response;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use std::sync::Arc;
use tracing::debug;

use crate::{ClientError, ClientResult, LedgerClient, LedgerQuery};

/// [`LedgerClient`] backed by a nonblocking `RpcClient`.
///
/// Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct NodeClient {
    rpc: Arc<RpcClient>,
}

impl NodeClient {
    /// Create a client targeting `rpc_url`, e.g. `https://api.mainnet-beta.solana.com`.
    /// Every query is made at `commitment`.
    pub fn new(rpc_url: impl Into<String>, commitment: CommitmentConfig) -> Self {
        Self {
            rpc: Arc::new(RpcClient::new_with_commitment(rpc_url.into(), commitment)),
        }
    }
}

#[async_trait]
impl LedgerClient for NodeClient {
    async fn get_balance(&self, address: &Pubkey) -> ClientResult<u64> {
        debug!(query = %LedgerQuery::Balance, %address, "ledger rpc call");
        let response = self
            .rpc
            .get_balance_with_commitment(address, self.rpc.commitment())
            .await
            .map_err(map_client_error)?;
        Ok(Some(response.value))
    }

    async fn get_latest_blockhash(&self) -> ClientResult<Hash> {
        debug!(query = %LedgerQuery::LatestBlockhash, "ledger rpc call");
        let (blockhash, _last_valid_block_height) = self
            .rpc
            .get_latest_blockhash_with_commitment(self.rpc.commitment())
            .await
            .map_err(map_client_error)?;
        Ok(Some(blockhash))
    }

    /// The node answers `value: null` for a blockhash it no longer knows;
    /// that comes back as `Ok(None)`.
    async fn get_fee_for_message(&self, message: &Message) -> ClientResult<u64> {
        debug!(query = %LedgerQuery::FeeForMessage, "ledger rpc call");
        let encoded = STANDARD.encode(message.serialize());
        let response: Response<Option<u64>> = self
            .rpc
            .send(
                RpcRequest::GetFeeForMessage,
                json!([encoded, self.rpc.commitment()]),
            )
            .await
            .map_err(map_client_error)?;
        Ok(response.value)
    }

    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> ClientResult<u64> {
        debug!(query = %LedgerQuery::RentExemption, data_len, "ledger rpc call");
        let lamports = self
            .rpc
            .get_minimum_balance_for_rent_exemption(data_len)
            .await
            .map_err(map_client_error)?;
        Ok(Some(lamports))
    }
}

/// Collapse the RPC client's error kinds onto [`ClientError`].
fn map_client_error(err: RpcClientError) -> ClientError {
    match err.kind() {
        ClientErrorKind::Reqwest(e) => match e.status() {
            Some(status) => ClientError::Http(status.as_u16()),
            None => ClientError::Request(e.to_string()),
        },
        ClientErrorKind::Io(e) => ClientError::Request(e.to_string()),
        ClientErrorKind::RpcError(RpcError::RpcResponseError { code, message, .. }) => {
            ClientError::Rpc {
                code: *code,
                message: message.clone(),
            }
        }
        ClientErrorKind::RpcError(RpcError::RpcRequestError(message)) => {
            ClientError::Request(message.clone())
        }
        other => ClientError::InvalidResponse(other.to_string()),
    }
}
