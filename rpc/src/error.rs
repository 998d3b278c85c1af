//! Error types for the HTTP facade.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sweep_wallet_core::{ClientError, LedgerQuery};
use thiserror::Error;

use crate::handlers::ErrorResponse;

/// Why a sweep could not be built.
///
/// Client faults (4xx) are terminal until the caller changes its input or
/// funds the wallet. Upstream faults (5xx) come from the ledger node and may
/// succeed on a later attempt.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Missing wallet address")]
    MissingWallet,

    /// The `wallet` field is present but is not a usable address.
    #[error("Invalid wallet address: {0}")]
    InvalidWallet(String),

    #[error("Insufficient balance to cover fee + rent exemption + buffer")]
    InsufficientFunds {
        balance: u64,
        fee: u64,
        rent_exempt_minimum: u64,
        buffer: u64,
    },

    /// A ledger query came back empty (`detail` is `None`) or failed.
    #[error("{}{}", .query.failure_message(), detail_suffix(.detail))]
    Upstream {
        query: LedgerQuery,
        detail: Option<ClientError>,
    },
}

fn detail_suffix(detail: &Option<ClientError>) -> String {
    detail.as_ref().map(|e| format!(": {e}")).unwrap_or_default()
}

impl SweepError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingWallet | Self::InvalidWallet(_) | Self::InsufficientFunds { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl IntoResponse for SweepError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Failure running the HTTP server itself.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}
