//! Client UI state and its transitions.

use std::fmt;
use std::str::FromStr;

use super::ClientError;
use crate::api::dto::OkResponse;

/// A user-triggered action. Each maps to one counter endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientAction {
    /// `GET /ping`.
    Ping,
    /// `POST /visits`.
    AddVisit,
    /// `GET /visits`.
    LoadCount,
}

impl ClientAction {
    /// Status shown while the request is in flight.
    #[must_use]
    pub const fn pending_message(self) -> &'static str {
        match self {
            Self::Ping => "Pinging API...",
            Self::AddVisit => "Adding visit...",
            Self::LoadCount => "Loading visits...",
        }
    }

    /// Prefix of the status shown when the request fails.
    #[must_use]
    pub const fn failure_prefix(self) -> &'static str {
        match self {
            Self::Ping => "Ping failed",
            Self::AddVisit => "Add visit failed",
            Self::LoadCount => "Load failed",
        }
    }
}

impl FromStr for ClientAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ping" => Ok(Self::Ping),
            "add" | "add-visit" => Ok(Self::AddVisit),
            "count" | "load" => Ok(Self::LoadCount),
            other => Err(format!(
                "unknown action `{other}` (expected ping, add or count)"
            )),
        }
    }
}

/// Successful result of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Ping answered.
    Pong(OkResponse),
    /// A visit was recorded; carries the count read after the insert.
    Added(u64),
    /// The current count was read.
    Loaded(u64),
}

impl ActionOutcome {
    /// The action that produces this outcome.
    #[must_use]
    pub const fn action(self) -> ClientAction {
        match self {
            Self::Pong(_) => ClientAction::Ping,
            Self::Added(_) => ClientAction::AddVisit,
            Self::Loaded(_) => ClientAction::LoadCount,
        }
    }
}

/// The two pieces of UI state: a status line and the last known count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientState {
    status: String,
    count: Option<u64>,
}

impl ClientState {
    /// Initial state: `Idle`, count unknown.
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: "Idle".to_string(),
            count: None,
        }
    }

    /// Current status line.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Last count returned by the service, if any.
    #[must_use]
    pub const fn count(&self) -> Option<u64> {
        self.count
    }

    /// Marks `action` as in flight.
    pub fn begin(&mut self, action: ClientAction) {
        self.status = action.pending_message().to_string();
    }

    /// Records a successful outcome. The success text follows the outcome.
    pub fn succeed(&mut self, outcome: ActionOutcome) {
        self.status = match outcome {
            ActionOutcome::Pong(body) => {
                let json = serde_json::to_string(&body).unwrap_or_else(|e| e.to_string());
                format!("Ping success: {json}")
            }
            ActionOutcome::Added(count) => {
                self.count = Some(count);
                "Visit added".to_string()
            }
            ActionOutcome::Loaded(count) => {
                self.count = Some(count);
                "Count loaded".to_string()
            }
        };
    }

    /// Records the failure of `action`. The count is left untouched.
    pub fn fail(&mut self, action: ClientAction, err: &ClientError) {
        self.status = format!("{}: {err}", action.failure_prefix());
    }
}

impl Default for ClientState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClientState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.count {
            Some(count) => writeln!(f, "Visit count: {count}")?,
            None => writeln!(f, "Visit count: unknown")?,
        }
        write!(f, "Status: {}", self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_unknown_count() {
        let state = ClientState::new();
        assert_eq!(state.status(), "Idle");
        assert_eq!(state.count(), None);
        assert_eq!(state.to_string(), "Visit count: unknown\nStatus: Idle");
    }

    #[test]
    fn ping_success_shows_body() {
        let mut state = ClientState::new();
        state.begin(ClientAction::Ping);
        assert_eq!(state.status(), "Pinging API...");

        state.succeed(ActionOutcome::Pong(OkResponse::OK));
        assert_eq!(state.status(), r#"Ping success: {"ok":true}"#);
        assert_eq!(state.count(), None);
    }

    #[test]
    fn add_then_load_updates_count() {
        let mut state = ClientState::new();
        state.begin(ClientAction::AddVisit);
        assert_eq!(state.status(), "Adding visit...");
        state.succeed(ActionOutcome::Added(1));
        assert_eq!(state.status(), "Visit added");
        assert_eq!(state.count(), Some(1));

        state.begin(ClientAction::LoadCount);
        assert_eq!(state.status(), "Loading visits...");
        state.succeed(ActionOutcome::Loaded(4));
        assert_eq!(state.status(), "Count loaded");
        assert_eq!(state.count(), Some(4));
    }

    #[test]
    fn failure_keeps_last_count() {
        let mut state = ClientState::new();
        state.succeed(ActionOutcome::Loaded(2));

        state.begin(ClientAction::AddVisit);
        state.fail(
            ClientAction::AddVisit,
            &ClientError::status(500, "internal".to_string()),
        );
        assert_eq!(state.status(), "Add visit failed: internal");
        assert_eq!(state.count(), Some(2));
    }

    #[test]
    fn success_text_follows_outcome() {
        let outcomes = [
            (ActionOutcome::Pong(OkResponse::OK), r#"Ping success: {"ok":true}"#),
            (ActionOutcome::Added(7), "Visit added"),
            (ActionOutcome::Loaded(7), "Count loaded"),
        ];
        for (outcome, expected) in outcomes {
            let mut state = ClientState::new();
            state.begin(outcome.action());
            state.succeed(outcome);
            assert_eq!(state.status(), expected);
        }
        assert_eq!(ActionOutcome::Added(1).action(), ClientAction::AddVisit);
        assert_eq!(ActionOutcome::Loaded(1).action(), ClientAction::LoadCount);
    }

    #[test]
    fn parses_action_names() {
        assert_eq!("ping".parse::<ClientAction>(), Ok(ClientAction::Ping));
        assert_eq!("add".parse::<ClientAction>(), Ok(ClientAction::AddVisit));
        assert_eq!("count".parse::<ClientAction>(), Ok(ClientAction::LoadCount));
        assert!("delete".parse::<ClientAction>().is_err());
    }
}
