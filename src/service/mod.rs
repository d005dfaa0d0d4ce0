//! Service layer: business logic orchestration.
//!
//! [`VisitService`] implements the counter operations on top of a
//! [`crate::persistence::VisitStore`].

pub mod visit_service;

pub use visit_service::VisitService;
