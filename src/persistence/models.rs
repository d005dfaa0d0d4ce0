//! Database models for visits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored row from the `visits` table.
///
/// Carries no payload: a visit is only its identity and creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    /// Auto-increment row ID.
    pub id: i64,
    /// Server-side creation timestamp.
    pub created_at: DateTime<Utc>,
}
