//! HTTP request handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::server::AppState;
use crate::sweep::build_sweep;
use crate::SweepError;

// ── Sweep ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct TxResponse {
    /// Base64 of the unsigned message, ready for the wallet to sign.
    pub transaction: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `POST /tx` with body `{"wallet": "<base58 address>"}`.
///
/// A body that is not a JSON object is treated as a request without a wallet.
pub async fn build_tx(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TxResponse>, SweepError> {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            debug!(%rejection, "unreadable /tx body");
            Value::Null
        }
    };

    let result = match wallet_field(&body) {
        Ok(wallet) => {
            info!(wallet = wallet.unwrap_or_default(), "building sweep transaction");
            build_sweep(state.client.as_ref(), &state.config, wallet).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(plan) => {
            info!(
                sender = %plan.sender,
                recipient = %plan.recipient,
                amount = plan.send_amount,
                fee = plan.snapshot.fee,
                "sweep transaction built"
            );
            Ok(Json(TxResponse {
                transaction: plan.transaction,
            }))
        }
        Err(e) if e.is_client_error() => {
            warn!(error = %e, "rejected sweep request");
            Err(e)
        }
        Err(e) => {
            error!(error = ?e, "sweep failed");
            Err(e)
        }
    }
}

/// The `wallet` member of a JSON object body.
///
/// Bodies that are not objects have no wallet. A present `wallet` that is
/// neither `null` nor a string is an invalid address.
fn wallet_field(body: &Value) -> Result<Option<&str>, SweepError> {
    let Value::Object(fields) = body else {
        return Ok(None);
    };
    match fields.get("wallet") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(wallet)) => Ok(Some(wallet)),
        Some(other) => Err(SweepError::InvalidWallet(format!(
            "expected a string, got {}",
            json_type(other)
        ))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
