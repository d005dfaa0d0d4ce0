//! Counter client: the UI state machine and the HTTP calls behind it.
//!
//! [`ClientApp`] mirrors the browser page served by the edge. Each action
//! moves the status to an in-progress message, issues one fresh request,
//! then records success or failure. The count only changes on success.

pub mod api;
pub mod state;

pub use api::{ClientError, CounterClient};
pub use state::{ActionOutcome, ClientAction, ClientState};

/// A [`CounterClient`] paired with the [`ClientState`] it drives.
#[derive(Debug)]
pub struct ClientApp {
    client: CounterClient,
    state: ClientState,
}

impl ClientApp {
    /// Creates an app in the `Idle` state.
    #[must_use]
    pub fn new(client: CounterClient) -> Self {
        Self {
            client,
            state: ClientState::new(),
        }
    }

    /// Returns the current UI state.
    #[must_use]
    pub fn state(&self) -> &ClientState {
        &self.state
    }

    /// Performs one user action and returns the resulting state.
    pub async fn run(&mut self, action: ClientAction) -> &ClientState {
        self.state.begin(action);
        tracing::debug!(?action, status = self.state.status(), "action started");

        let result = match action {
            ClientAction::Ping => self.client.ping().await.map(ActionOutcome::Pong),
            ClientAction::AddVisit => self
                .client
                .add_visit()
                .await
                .map(|r| ActionOutcome::Added(r.count)),
            ClientAction::LoadCount => self
                .client
                .fetch_visits()
                .await
                .map(|r| ActionOutcome::Loaded(r.count)),
        };

        match result {
            Ok(outcome) => self.state.succeed(outcome),
            Err(err) => {
                tracing::warn!(?action, error = %err, "action failed");
                self.state.fail(action, &err);
            }
        }
        &self.state
    }
}
