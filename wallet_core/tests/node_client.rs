//! `NodeClient` against an in-process JSON-RPC node.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use std::sync::{Arc, Mutex};
use sweep_wallet_core::transaction_builder::build_fee_probe_message;
use sweep_wallet_core::{ClientError, LedgerClient, NodeClient};

type Seen = Arc<Mutex<Vec<Value>>>;

async fn fake_node(State(seen): State<Seen>, Json(req): Json<Value>) -> Json<Value> {
    seen.lock().unwrap().push(req.clone());
    let id = req["id"].clone();
    let result = match req["method"].as_str().unwrap_or_default() {
        "getBalance" => json!({"context": {"slot": 1}, "value": 5_000_000}),
        "getLatestBlockhash" => json!({
            "context": {"slot": 1},
            "value": {
                "blockhash": "EkSnNWid2cvwEVnVx9aBqawnmiCNiDgp3gUdkDPTKN1N",
                "lastValidBlockHeight": 3090
            }
        }),
        "getFeeForMessage" => json!({"context": {"slot": 1}, "value": null}),
        "getMinimumBalanceForRentExemption" => json!(890_880),
        // Some client releases check the node version before commitment-bearing calls.
        "getVersion" => json!({"solana-core": "2.3.0", "feature-set": 0}),
        _ => {
            return Json(json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": {"code": -32601, "message": "Method not found"}
            }))
        }
    };
    Json(json!({"jsonrpc": "2.0", "id": id, "result": result}))
}

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn spawn_fake_node(commitment: CommitmentConfig) -> (NodeClient, Seen) {
    let seen: Seen = Arc::default();
    let app = Router::new()
        .route("/", post(fake_node))
        .with_state(seen.clone());
    let url = spawn(app).await;
    (NodeClient::new(url, commitment), seen)
}

/// Requests the fake node received for `method`, in arrival order.
fn requests(seen: &Seen, method: &str) -> Vec<Value> {
    seen.lock()
        .unwrap()
        .iter()
        .filter(|req| req["method"] == method)
        .cloned()
        .collect()
}

#[tokio::test]
async fn queries_use_node_methods_and_parse_results() {
    let (client, seen) = spawn_fake_node(CommitmentConfig::finalized()).await;
    let wallet: Pubkey = "9i8bausot6icWYDG2yvC6j6CtuHRb5wmuYpA4KjERgxD".parse().unwrap();
    let probe = build_fee_probe_message(&wallet, &Hash::new_from_array([3u8; 32]));

    assert_eq!(client.get_balance(&wallet).await.unwrap(), Some(5_000_000));
    let hash = client.get_latest_blockhash().await.unwrap().unwrap();
    assert_eq!(hash.to_string(), "EkSnNWid2cvwEVnVx9aBqawnmiCNiDgp3gUdkDPTKN1N");
    assert_eq!(
        client
            .get_minimum_balance_for_rent_exemption(0)
            .await
            .unwrap(),
        Some(890_880)
    );

    let balance = &requests(&seen, "getBalance")[0];
    assert_eq!(balance["jsonrpc"], "2.0");
    assert_eq!(balance["params"][0], wallet.to_string());
    assert_eq!(balance["params"][1]["commitment"], "finalized");
    assert_eq!(requests(&seen, "getLatestBlockhash").len(), 1);
    assert_eq!(
        requests(&seen, "getMinimumBalanceForRentExemption")[0]["params"][0],
        0
    );

    // A null fee is an absent result, not an error.
    assert_eq!(client.get_fee_for_message(&probe).await.unwrap(), None);
    let fee = &requests(&seen, "getFeeForMessage")[0];
    assert_eq!(fee["params"][0], STANDARD.encode(probe.serialize()));
    assert_eq!(fee["params"][1]["commitment"], "finalized");

    assert_ne!(balance["id"], fee["id"]);
}

#[tokio::test]
async fn commitment_is_configurable() {
    let (client, seen) = spawn_fake_node(CommitmentConfig::confirmed()).await;
    client.get_latest_blockhash().await.unwrap();

    assert_eq!(
        requests(&seen, "getLatestBlockhash")[0]["params"][0]["commitment"],
        "confirmed"
    );
}

#[tokio::test]
async fn http_failure_is_a_client_error() {
    let app = Router::new().route(
        "/",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    );
    let client = NodeClient::new(spawn(app).await, CommitmentConfig::finalized());

    assert_eq!(
        client.get_balance(&Pubkey::new_unique()).await,
        Err(ClientError::Http(503))
    );
}

#[tokio::test]
async fn rpc_error_object_is_surfaced() {
    let app = Router::new().route(
        "/",
        post(|Json(req): Json<Value>| async move {
            let id = req["id"].clone();
            Json(json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": {"code": -32602, "message": "Invalid param: WrongSize"}
            }))
        }),
    );
    let client = NodeClient::new(spawn(app).await, CommitmentConfig::finalized());

    assert_eq!(
        client.get_balance(&Pubkey::new_unique()).await,
        Err(ClientError::Rpc {
            code: -32602,
            message: "Invalid param: WrongSize".into()
        })
    );
}

#[tokio::test]
async fn unreachable_node_is_a_request_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = NodeClient::new(format!("http://{addr}"), CommitmentConfig::finalized());
    assert!(matches!(
        client.get_minimum_balance_for_rent_exemption(0).await,
        Err(ClientError::Request(_))
    ));
}
