//! reqtime demo server
//!
//! Serves a few routes with request timing installed, writing one point per
//! resolved request to the configured InfluxDB.
//!
//! Config path: first argument, else `REQTIME_CONFIG`, else `reqtime.yaml`.

use std::net::SocketAddr;
use std::sync::Arc;

use reqtime_core::error::{ReqtimeError, Result};
use reqtime_middleware::writer::{InfluxWriter, PointWriter};
use reqtime_middleware::{config, obs, router};

#[tokio::main]
async fn main() {
    obs::init_logging();

    if let Err(e) = run().await {
        tracing::error!(error = %e, code = e.code().as_str(), "reqtime-demo failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = config::resolve_path(
        std::env::args().nth(1),
        std::env::var(config::CONFIG_ENV).ok(),
    );

    let cfg = config::load_from_file(&path)?;
    let listen: SocketAddr = cfg.server.listen.parse().map_err(|e| {
        ReqtimeError::BadRequest(format!("server.listen must be a valid SocketAddr: {e}"))
    })?;

    let writer: Arc<dyn PointWriter> = Arc::new(InfluxWriter::new(&cfg.influxdb)?);
    let app = router::build_router(&cfg.metrics, writer);

    tracing::info!(%listen, config = %path, "reqtime-demo starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| ReqtimeError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| ReqtimeError::Internal(format!("server failed: {e}")))
}
