//! Trip request models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripdesk_core::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `trip_requests` table.
///
/// `status` is always one of the [`TripStatus`](tripdesk_core::trip_status::TripStatus)
/// values; the table carries a CHECK constraint as well.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub id: EntityId,
    pub destination: String,
    pub status: String,
    pub contact_name: String,
    pub contact_email: String,
    pub notes: Option<String>,
    pub activity_ids: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Lightweight projection used for enumeration.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequestSummary {
    pub id: EntityId,
    pub destination: String,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for submitting a new trip request from the visitor's cart.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripRequest {
    pub destination: String,
    pub contact_name: String,
    pub contact_email: String,
    pub notes: Option<String>,
    #[serde(default)]
    pub activity_ids: Vec<String>,
}

/// DTO for the status mutation endpoint.
///
/// `status` stays a raw JSON value so that anything other than a domain
/// string is rejected by the status guard rather than by deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTripStatus {
    #[serde(default)]
    pub status: Option<serde_json::Value>,
}

impl UpdateTripStatus {
    /// The submitted status if it is a JSON string, otherwise `""`.
    pub fn candidate(&self) -> &str {
        self.status
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
    }
}
