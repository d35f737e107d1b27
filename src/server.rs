//! Server bootstrap: config → engine → router → listener.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use quarry_core::config::Config;
use quarry_engine::build_engine;
use tokio::net::TcpListener;

use crate::api::{ApiService, ServiceOptions};

/// Build the engine named by `config`, mount the API and serve until Ctrl-C.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let engine = build_engine(&config.engine, tokio::runtime::Handle::current())
        .with_context(|| format!("failed to start {} engine", config.engine.kind))?;

    let service = ApiService::new(
        Router::new(),
        Arc::new(engine),
        ServiceOptions::from_config(&config),
    );

    let listener = TcpListener::bind(config.server.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind))?;
    serve(listener, service.into_router()).await
}

/// Serve `router` on an already-bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, router: Router) -> anyhow::Result<()> {
    let addr: SocketAddr = listener.local_addr()?;
    tracing::info!("quarry listening on http://{addr}");
    tracing::info!("search: http://{addr}/search/{{query}}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("quarry stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl-C handler: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
