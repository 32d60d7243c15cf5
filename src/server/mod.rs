//! Serving surface wiring the three extraction paths to the network.
//!
//! All parsing and normalization lives in the core modules; this layer only
//! builds adapter inputs from network input and serializes the responses.

mod mtls;
mod routes;

use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;

use crate::config::Config;
use crate::oid_registry::OidRegistry;

pub use routes::{api_router, ApiState};

/// Body sent for failed extractions, alongside a non-2xx status.
#[derive(Debug, Serialize)]
pub(crate) struct ErrorResponse {
    /// Always `false`.
    pub ok: bool,
    /// Human-readable failure description.
    pub error: String,
}

impl ErrorResponse {
    pub(crate) fn new(error: String) -> Self {
        ErrorResponse { ok: false, error }
    }
}

/// Runs the full serving surface until the process is stopped:
/// the plain-HTTP API for the proxy-header and upload paths, plus one mTLS
/// login listener per configured port.
pub async fn run_server(config: &Config, registry: Arc<OidRegistry>) -> anyhow::Result<()> {
    let (tls_config, attested) = crate::initialization::init_server_config(
        &config.cert,
        &config.key,
        config.client_ca.as_deref(),
    )
    .context("Failed to initialize TLS listener configuration")?;

    let mut listener_tasks = Vec::new();
    for instance in 0..config.tls_instances {
        let port = config.tls_port + instance;
        let tls_config = Arc::clone(&tls_config);
        let registry = Arc::clone(&registry);
        listener_tasks.push(tokio::spawn(async move {
            if let Err(e) = mtls::run_mtls_listener(port, tls_config, registry, attested).await {
                log::error!("mTLS listener on port {port} failed: {e}");
            }
        }));
    }

    let app = api_router(ApiState { registry });
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.http_port))
        .await
        .with_context(|| format!("Failed to bind API server to port {}", config.http_port))?;
    log::info!("API server listening on http://127.0.0.1:{}/", config.http_port);

    let result = axum::serve(listener, app)
        .await
        .context("API server error");

    for task in listener_tasks {
        task.abort();
    }
    result
}
