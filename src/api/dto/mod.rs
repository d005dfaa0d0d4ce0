//! Data Transfer Objects for REST request/response serialization.
//!
//! Shared by the server handlers and the Rust client.

pub mod visit_dto;

pub use visit_dto::*;
