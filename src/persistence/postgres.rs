//! PostgreSQL implementation of the visit store.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::{Visit, VisitStore};
use crate::config::CounterConfig;
use crate::error::CounterError;

/// PostgreSQL-backed visit store using `sqlx::PgPool`.
///
/// The `visits` table may predate the bundled migration with narrower
/// column types (`SERIAL`, `TIMESTAMP`); queries cast in SQL so either
/// shape decodes.
#[derive(Debug, Clone)]
pub struct PostgresVisitStore {
    pool: PgPool,
    schema_ready: Arc<AtomicBool>,
}

impl PostgresVisitStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            schema_ready: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Builds a lazily connecting pool from the service configuration.
    ///
    /// No connection is opened here, so the service can start and answer
    /// health checks while the database is still unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::StoreUnavailable`] if the connection string
    /// cannot be parsed.
    pub fn connect_lazy(config: &CounterConfig) -> Result<Self, CounterError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(config.connect_timeout())
            .connect_lazy(&config.database_url)?;
        Ok(Self::new(pool))
    }

    /// Applies the bundled migrations, creating the `visits` table if it
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::StoreUnavailable`] if the database cannot be
    /// reached or a migration fails.
    pub async fn ensure_schema(&self) -> Result<(), CounterError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| CounterError::StoreUnavailable(e.to_string()))?;
        self.schema_ready.store(true, Ordering::Release);
        Ok(())
    }

    /// Whether the migrations have been applied by this process.
    #[must_use]
    pub fn schema_ready(&self) -> bool {
        self.schema_ready.load(Ordering::Acquire)
    }

    /// Retries the migrations after a failed query until one run succeeds,
    /// so a database that came up after startup gets its table. The failed
    /// query itself is not retried.
    async fn after_failure(&self, err: sqlx::Error) -> CounterError {
        if !self.schema_ready() {
            match self.ensure_schema().await {
                Ok(()) => tracing::info!("migrations applied after store failure"),
                Err(e) => tracing::warn!(error = %e, "migrations still pending"),
            }
        }
        err.into()
    }
}

#[async_trait]
impl VisitStore for PostgresVisitStore {
    async fn insert_visit(&self) -> Result<Visit, CounterError> {
        let row = sqlx::query_as::<_, (i64, DateTime<Utc>)>(
            "INSERT INTO visits DEFAULT VALUES RETURNING id::int8, created_at::timestamptz",
        )
        .fetch_one(&self.pool)
        .await;

        match row {
            Ok((id, created_at)) => Ok(Visit { id, created_at }),
            Err(err) => Err(self.after_failure(err).await),
        }
    }

    async fn count_visits(&self) -> Result<u64, CounterError> {
        let count = match sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM visits")
            .fetch_one(&self.pool)
            .await
        {
            Ok(count) => count,
            Err(err) => return Err(self.after_failure(err).await),
        };

        u64::try_from(count)
            .map_err(|_| CounterError::Internal(format!("negative visit count {count}")))
    }
}
