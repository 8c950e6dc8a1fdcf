//! Destination rows. Content is maintained outside this service; the table
//! exists so activities carry a real foreign key.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripdesk_core::types::{EntityId, Timestamp};

/// A row from the `destinations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: EntityId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for importing a destination.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDestination {
    pub id: EntityId,
    pub name: String,
}
