//! Sweep daemon — serves the transaction-building HTTP endpoint.

use anyhow::Context;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use sweep_rpc::{AppState, RpcServer, SweepConfig};
use sweep_utils::{init_logging, LogFormat};
use sweep_wallet_core::NodeClient;
use tokio::signal;

#[derive(Parser, Debug)]
#[command(name = "sweep-daemon", about = "Builds unsigned sweep transactions for browser wallets")]
struct Cli {
    /// Port for the HTTP server.
    #[arg(long, default_value_t = 5000, env = "PORT")]
    port: u16,

    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0", env = "SWEEP_HOST")]
    host: IpAddr,

    /// Directory holding the front-end `index.html`.
    #[arg(long, default_value = "static", env = "SWEEP_STATIC_DIR")]
    static_dir: PathBuf,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "SWEEP_LOG_LEVEL")]
    log_level: String,

    /// Log format: "human" or "json".
    #[arg(long, default_value = "human", env = "SWEEP_LOG_FORMAT")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format, &cli.log_level);

    let config = SweepConfig {
        static_dir: cli.static_dir,
        ..SweepConfig::default()
    };
    let client = NodeClient::new(config.rpc_url.clone(), config.commitment);

    tracing::info!(
        rpc_url = %config.rpc_url,
        recipient = %config.recipient,
        safety_buffer = config.safety_buffer,
        commitment = ?config.commitment.commitment,
        "starting sweep daemon"
    );

    let addr = SocketAddr::new(cli.host, cli.port);
    let state = Arc::new(AppState::new(config, Arc::new(client)));
    RpcServer::new(addr, state)
        .start(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("sweep daemon exited cleanly");
    Ok(())
}

/// Resolve on SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("failed to listen for SIGINT: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => { tracing::info!("received SIGINT, shutting down"); }
        _ = terminate => { tracing::info!("received SIGTERM, shutting down"); }
    }
}
