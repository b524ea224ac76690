//! Server module
//!
//! Binds the HTTP listener and serves the responder routes until shutdown.

pub mod http;

pub use http::{create_router, AppState, ChatRequest, ChatResponse, HealthResponse};

use crate::config::ServerConfig;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Bind error: {0}")]
    Bind(String),
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Serve `state` on the configured address until Ctrl-C
pub async fn run_server(config: &ServerConfig, state: AppState) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e: std::net::AddrParseError| ServerError::Bind(e.to_string()))?;

    let app = create_router(state, &config.cors_origins);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("{}: {}", addr, e)))?;

    tracing::info!(address = %addr, "Canvas Assistant listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
