use thiserror::Error;

/// Failure talking to the ledger node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("node returned HTTP {0}")]
    Http(u16),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },
}
