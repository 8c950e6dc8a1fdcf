//! Activity catalog models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripdesk_core::types::{EntityId, Timestamp};

/// A row from the `activities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: EntityId,
    pub destination_id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An ordered catalog read together with its length.
///
/// `count` always equals `activities.len()`; callers use it to tell an empty
/// match apart from a truncated fetch without recomputing.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityListing {
    pub activities: Vec<Activity>,
    pub count: usize,
}

impl From<Vec<Activity>> for ActivityListing {
    fn from(activities: Vec<Activity>) -> Self {
        let count = activities.len();
        Self { activities, count }
    }
}

/// DTO for importing an activity into the catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivity {
    pub id: EntityId,
    pub destination_id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
}
