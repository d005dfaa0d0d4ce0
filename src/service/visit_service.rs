//! Visit service: appends visits and reads the running count.

use std::sync::Arc;

use crate::error::CounterError;
use crate::persistence::VisitStore;

/// Orchestration layer for the counter operations.
///
/// Stateless coordinator: owns a shared handle to the [`VisitStore`] and
/// nothing else. `add_visit` is an insert followed by an independent
/// count, so under concurrent load the returned count may or may not
/// include a sibling caller's insert.
#[derive(Debug, Clone)]
pub struct VisitService {
    store: Arc<dyn VisitStore>,
}

impl VisitService {
    /// Creates a new `VisitService` over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn VisitStore>) -> Self {
        Self { store }
    }

    /// Returns the total number of recorded visits.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::StoreUnavailable`] if the store cannot be
    /// queried.
    pub async fn get_count(&self) -> Result<u64, CounterError> {
        self.store.count_visits().await
    }

    /// Records one visit and returns the count read after the insert.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::StoreUnavailable`] if either the insert or
    /// the count fails.
    pub async fn add_visit(&self) -> Result<u64, CounterError> {
        let visit = self.store.insert_visit().await?;
        tracing::debug!(visit_id = visit.id, created_at = %visit.created_at, "visit recorded");

        let count = self.get_count().await?;
        tracing::info!(count, "visit added");
        Ok(count)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::persistence::InMemoryVisitStore;

    fn make_service() -> (VisitService, Arc<InMemoryVisitStore>) {
        let store = Arc::new(InMemoryVisitStore::new());
        let service = VisitService::new(Arc::clone(&store) as Arc<dyn VisitStore>);
        (service, store)
    }

    #[tokio::test]
    async fn empty_store_reports_zero() {
        let (service, _) = make_service();
        let Ok(count) = service.get_count().await else {
            panic!("count failed");
        };
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn sequential_adds_count_exactly() {
        let (service, _) = make_service();
        for expected in 1..=5u64 {
            let Ok(count) = service.add_visit().await else {
                panic!("add failed");
            };
            assert_eq!(count, expected);
        }

        let Ok(count) = service.get_count().await else {
            panic!("count failed");
        };
        assert_eq!(count, 5);
    }

    #[tokio::test]
    async fn store_outage_surfaces_as_store_unavailable() {
        let (service, store) = make_service();
        store.set_available(false);

        assert!(matches!(
            service.get_count().await,
            Err(CounterError::StoreUnavailable(_))
        ));
        assert!(matches!(
            service.add_visit().await,
            Err(CounterError::StoreUnavailable(_))
        ));

        store.set_available(true);
        let Ok(count) = service.get_count().await else {
            panic!("count failed");
        };
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn concurrent_adds_never_lose_inserts() {
        let (service, _) = make_service();
        let mut handles = Vec::new();
        for _ in 0..16 {
            let service = service.clone();
            handles.push(tokio::spawn(async move { service.add_visit().await }));
        }

        let mut max_seen = 0;
        for handle in handles {
            let Ok(Ok(count)) = handle.await else {
                panic!("add task failed");
            };
            assert!((1..=16).contains(&count));
            max_seen = max_seen.max(count);
        }
        assert_eq!(max_seen, 16);

        let Ok(count) = service.get_count().await else {
            panic!("count failed");
        };
        assert_eq!(count, 16);
    }
}
