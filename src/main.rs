//! visit-counter server entry point.
//!
//! Starts the Axum HTTP server with the health, ping and visit endpoints.

use std::sync::Arc;

use visit_counter::api;
use visit_counter::app_state::AppState;
use visit_counter::config::CounterConfig;
use visit_counter::persistence::{InMemoryVisitStore, PostgresVisitStore, VisitStore};
use visit_counter::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = CounterConfig::from_env();
    telemetry::init_tracing(config.log_format);
    tracing::info!(addr = %config.listen_addr, "starting visit-counter");

    // Build persistence layer
    let store: Arc<dyn VisitStore> = if config.persistence_enabled {
        let store = PostgresVisitStore::connect_lazy(&config)?;
        // The service still starts without a database; visit calls fail
        // with 500 until it is reachable.
        if let Err(err) = store.ensure_schema().await {
            tracing::warn!(
                error = %err,
                "could not apply migrations; retrying after the next failed store call"
            );
        }
        Arc::new(store)
    } else {
        tracing::warn!("persistence disabled, visits are kept in memory");
        Arc::new(InMemoryVisitStore::new())
    };

    // Build router
    let app = api::build_app(AppState::new(store));

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
