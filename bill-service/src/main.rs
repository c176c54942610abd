use anyhow::{Context, Result};
use bill_service::{config::AppConfig, http, metrics_server, observability, store::SqliteBillStore};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<()> {
    observability::init_tracing();

    let cfg = AppConfig::load()?;

    if let Some(metrics_cfg) = &cfg.metrics {
        metrics_server::init(&metrics_cfg.bind_addr)?;
    }

    // Storage must be usable before we accept any request.
    let store = SqliteBillStore::open(&cfg.storage.path)
        .await
        .with_context(|| format!("bill storage unavailable at {}", cfg.storage.path))?;

    let addr: SocketAddr = cfg
        .server
        .bind_addr
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid server.bind_addr: {e}"))?;

    let app = http::router(http::AppState::new(store));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, "bill service listening");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
