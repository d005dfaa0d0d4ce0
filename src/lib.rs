//! # visit-counter
//!
//! A persisted visit counter exposed over HTTP, an edge proxy that forwards
//! `/backend/*` to it, and a client that drives it through the proxy.
//!
//! ## Architecture
//!
//! ```text
//! Browser page / visit-client
//!     │
//!     ├── Edge proxy (proxy/)      /backend/* → counter service
//!     │
//!     ├── REST Handlers (api/)
//!     ├── VisitService (service/)
//!     │
//!     └── VisitStore (persistence/)
//!             ├── PostgreSQL
//!             └── in-memory
//! ```

pub mod api;
pub mod app_state;
pub mod client;
pub mod config;
pub mod error;
pub mod persistence;
pub mod proxy;
pub mod service;
pub mod telemetry;
