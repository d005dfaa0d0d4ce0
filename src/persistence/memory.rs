//! In-process visit store.
//!
//! [`InMemoryVisitStore`] keeps visits in a `Vec` behind a
//! [`tokio::sync::RwLock`]. It stands in for PostgreSQL in tests and when
//! persistence is disabled. An availability switch lets tests simulate an
//! unreachable database.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{Visit, VisitStore};
use crate::error::CounterError;

/// Visit store held entirely in memory. Contents are lost on restart.
#[derive(Debug)]
pub struct InMemoryVisitStore {
    visits: RwLock<Vec<Visit>>,
    available: AtomicBool,
}

impl InMemoryVisitStore {
    /// Creates an empty, reachable store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            visits: RwLock::new(Vec::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Creates a store that fails every call, as if the database were down.
    #[must_use]
    pub fn unavailable() -> Self {
        let store = Self::new();
        store.set_available(false);
        store
    }

    /// Switches the simulated reachability of the store.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), CounterError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(CounterError::StoreUnavailable(
                "in-memory store marked unavailable".to_string(),
            ))
        }
    }
}

impl Default for InMemoryVisitStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VisitStore for InMemoryVisitStore {
    async fn insert_visit(&self) -> Result<Visit, CounterError> {
        self.check_available()?;
        let mut visits = self.visits.write().await;
        let id = i64::try_from(visits.len())
            .map_err(|e| CounterError::Internal(e.to_string()))?
            .saturating_add(1);
        let visit = Visit {
            id,
            created_at: Utc::now(),
        };
        visits.push(visit.clone());
        Ok(visit)
    }

    async fn count_visits(&self) -> Result<u64, CounterError> {
        self.check_available()?;
        let visits = self.visits.read().await;
        Ok(visits.len() as u64)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn empty_store_counts_zero() {
        let store = InMemoryVisitStore::new();
        let Ok(count) = store.count_visits().await else {
            panic!("count failed");
        };
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = InMemoryVisitStore::new();
        let Ok(first) = store.insert_visit().await else {
            panic!("insert failed");
        };
        let Ok(second) = store.insert_visit().await else {
            panic!("insert failed");
        };
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(second.created_at >= first.created_at);
    }

    #[tokio::test]
    async fn unavailable_store_fails_both_operations() {
        let store = InMemoryVisitStore::unavailable();
        assert!(matches!(
            store.insert_visit().await,
            Err(CounterError::StoreUnavailable(_))
        ));
        assert!(matches!(
            store.count_visits().await,
            Err(CounterError::StoreUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn failed_inserts_are_not_counted() {
        let store = InMemoryVisitStore::new();
        let _ = store.insert_visit().await;
        store.set_available(false);
        let _ = store.insert_visit().await;
        store.set_available(true);

        let Ok(count) = store.count_visits().await else {
            panic!("count failed");
        };
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn concurrent_inserts_are_not_lost() {
        let store = Arc::new(InMemoryVisitStore::new());
        let mut handles = Vec::new();
        for _ in 0..32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move { store.insert_visit().await }));
        }
        for handle in handles {
            let Ok(Ok(_)) = handle.await else {
                panic!("insert task failed");
            };
        }

        let Ok(count) = store.count_visits().await else {
            panic!("count failed");
        };
        assert_eq!(count, 32);
    }
}
