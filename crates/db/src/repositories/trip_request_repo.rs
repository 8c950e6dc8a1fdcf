//! Repository for the `trip_requests` table.
//!
//! Rows are never deleted; archival is the `archived` status. Status writes
//! take a typed [`TripStatus`] so only members of the domain reach SQL.

use sqlx::PgPool;
use tripdesk_core::trip_status::TripStatus;
use uuid::Uuid;

use crate::models::trip_request::{CreateTripRequest, TripRequest, TripRequestSummary};

/// Column list for `trip_requests` queries.
const COLUMNS: &str = "\
    id, destination, status, contact_name, contact_email, notes, \
    activity_ids, created_at, updated_at";

/// Provides data access for trip requests.
pub struct TripRequestRepo;

impl TripRequestRepo {
    /// Insert a new trip request with status `new` and a fresh id.
    ///
    /// `dto.activity_ids` is stored as given; callers normalize it first.
    pub async fn create(pool: &PgPool, dto: &CreateTripRequest) -> Result<TripRequest, sqlx::Error> {
        let id = Uuid::new_v4().to_string();
        let query = format!(
            "INSERT INTO trip_requests \
                 (id, destination, status, contact_name, contact_email, notes, activity_ids) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TripRequest>(&query)
            .bind(&id)
            .bind(&dto.destination)
            .bind(TripStatus::New.as_str())
            .bind(&dto.contact_name)
            .bind(&dto.contact_email)
            .bind(&dto.notes)
            .bind(&dto.activity_ids)
            .fetch_one(pool)
            .await
    }

    /// Find a trip request by its id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<TripRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trip_requests WHERE id = $1");
        sqlx::query_as::<_, TripRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List `{id, destination, created_at}` for every trip request, oldest first.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<TripRequestSummary>, sqlx::Error> {
        sqlx::query_as::<_, TripRequestSummary>(
            "SELECT id, destination, created_at FROM trip_requests \
             ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// List full rows, newest first, optionally filtered by status.
    pub async fn list_by_status(
        pool: &PgPool,
        status: Option<TripStatus>,
    ) -> Result<Vec<TripRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM trip_requests \
             WHERE ($1::TEXT IS NULL OR status = $1) \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, TripRequest>(&query)
            .bind(status.map(TripStatus::as_str))
            .fetch_all(pool)
            .await
    }

    /// Set the status and refresh `updated_at` in one statement.
    ///
    /// Returns `None` when no row matches `id`; nothing is inserted in that
    /// case. `updated_at` never moves backwards even if the database clock
    /// does.
    pub async fn update_status(
        pool: &PgPool,
        id: &str,
        status: TripStatus,
    ) -> Result<Option<TripRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE trip_requests SET \
                 status = $2, \
                 updated_at = GREATEST(clock_timestamp(), updated_at + INTERVAL '1 microsecond') \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TripRequest>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }
}
