//! visit-client entry point.
//!
//! Runs the given actions (`ping`, `add`, `count`) in order against
//! `VISIT_CLIENT_BASE_URL` and prints the UI state after each one.
//!
//! ```text
//! visit-client add add count
//! ```

use anyhow::Context;
use visit_counter::client::{ClientAction, ClientApp, CounterClient};
use visit_counter::config::{ClientConfig, LogFormat};
use visit_counter::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing(LogFormat::Text);
    let config =
        ClientConfig::from_env().map_err(|e| anyhow::anyhow!("invalid client config: {e}"))?;

    let actions = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<ClientAction>().map_err(anyhow::Error::msg))
        .collect::<anyhow::Result<Vec<_>>>()
        .context("usage: visit-client [ping|add|count]...")?;

    let mut app = ClientApp::new(CounterClient::new(config.base_url));
    println!("{}", app.state());

    for action in actions {
        println!("{}", action.pending_message());
        let state = app.run(action).await;
        println!("{state}");
    }

    Ok(())
}
