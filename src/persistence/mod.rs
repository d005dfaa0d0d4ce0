//! Persistence layer: the append-only visit store.
//!
//! [`VisitStore`] is the seam between the service layer and the
//! relational store. The PostgreSQL implementation uses `sqlx::PgPool`;
//! the in-memory implementation backs tests and database-less runs.

pub mod memory;
pub mod models;
pub mod postgres;

use async_trait::async_trait;

pub use memory::InMemoryVisitStore;
pub use models::Visit;
pub use postgres::PostgresVisitStore;

use crate::error::CounterError;

/// Append-only store of [`Visit`] rows.
///
/// Implementations must never lose a committed insert. No ordering is
/// promised between an insert and a later count issued by another caller.
#[async_trait]
pub trait VisitStore: Send + Sync + std::fmt::Debug {
    /// Inserts one visit and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::StoreUnavailable`] if the store cannot be
    /// reached or the insert fails.
    async fn insert_visit(&self) -> Result<Visit, CounterError>;

    /// Counts all stored visits.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::StoreUnavailable`] if the store cannot be
    /// reached or the query fails.
    async fn count_visits(&self) -> Result<u64, CounterError>;
}
