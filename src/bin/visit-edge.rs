//! visit-edge entry point.
//!
//! Serves the browser client and forwards `/backend/*` to the counter
//! service named by `API_URL`.

use visit_counter::config::EdgeConfig;
use visit_counter::proxy::{self, EdgeState};
use visit_counter::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = EdgeConfig::from_env().map_err(|e| anyhow::anyhow!("invalid edge config: {e}"))?;
    telemetry::init_tracing(config.log_format);
    tracing::info!(
        addr = %config.listen_addr,
        upstream = %config.upstream_url,
        "starting visit-edge"
    );

    let app = proxy::build_edge(EdgeState::from_config(&config)?);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "edge listening");

    axum::serve(listener, app).await?;

    Ok(())
}
