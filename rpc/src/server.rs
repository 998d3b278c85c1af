//! Axum-based HTTP server.

use axum::routing::{get_service, post};
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use sweep_wallet_core::LedgerClient;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::RpcError;
use crate::handlers;
use crate::SweepConfig;

/// Read-only state shared by every request.
pub struct AppState {
    pub config: SweepConfig,
    pub client: Arc<dyn LedgerClient>,
}

impl AppState {
    pub fn new(config: SweepConfig, client: Arc<dyn LedgerClient>) -> Self {
        Self { config, client }
    }
}

/// Build the router: `GET /` serves the front-end page, `POST /tx` builds
/// sweeps. CORS is open to any origin.
pub fn router(state: Arc<AppState>) -> Router {
    let index = ServeFile::new(state.config.index_file());
    Router::new()
        .route("/", get_service(index))
        .route("/tx", post(handlers::build_tx))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub struct RpcServer {
    pub addr: SocketAddr,
    state: Arc<AppState>,
}

impl RpcServer {
    pub fn new(addr: SocketAddr, state: Arc<AppState>) -> Self {
        Self { addr, state }
    }

    /// Serve until `shutdown` resolves, then finish in-flight requests.
    pub async fn start(
        &self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), RpcError> {
        let listener = tokio::net::TcpListener::bind(self.addr)
            .await
            .map_err(|source| RpcError::Bind {
                addr: self.addr,
                source,
            })?;
        info!("HTTP server listening on {}", self.addr);

        axum::serve(listener, router(self.state.clone()))
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}
