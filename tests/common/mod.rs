//! Helpers for binding real listeners in end-to-end tests.

#![allow(clippy::panic, dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::Url;
use tokio::net::TcpListener;
use visit_counter::api;
use visit_counter::app_state::AppState;
use visit_counter::persistence::{InMemoryVisitStore, VisitStore};
use visit_counter::proxy::{self, EdgeState};

/// Serves `app` on an ephemeral loopback port.
pub async fn spawn(app: Router) -> SocketAddr {
    let Ok(listener) = TcpListener::bind("127.0.0.1:0").await else {
        panic!("bind loopback");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("local addr");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

/// A counter service on an in-memory store, fronted by an edge proxy.
pub struct Stack {
    pub store: Arc<InMemoryVisitStore>,
    pub api_addr: SocketAddr,
    pub edge_addr: SocketAddr,
}

impl Stack {
    pub async fn start() -> Self {
        let store = Arc::new(InMemoryVisitStore::new());
        let state = AppState::new(Arc::clone(&store) as Arc<dyn VisitStore>);
        let api_addr = spawn(api::build_app(state)).await;

        let Ok(edge_state) = EdgeState::new(url(&format!("http://{api_addr}"))) else {
            panic!("edge state");
        };
        let edge_addr = spawn(proxy::build_edge(edge_state)).await;

        Self {
            store,
            api_addr,
            edge_addr,
        }
    }

    pub fn edge(&self, path: &str) -> String {
        format!("http://{}{path}", self.edge_addr)
    }

    pub fn api(&self, path: &str) -> String {
        format!("http://{}{path}", self.api_addr)
    }
}

pub fn url(raw: &str) -> Url {
    let Ok(url) = raw.parse() else {
        panic!("valid url: {raw}");
    };
    url
}
