//! Read-only catalog over the `activities` table, scoped by destination.
//!
//! Activities are imported by a content path outside this service; the only
//! write here is [`ActivityRepo::create`], used by imports and fixtures.

use sqlx::PgPool;

use crate::models::activity::{Activity, ActivityListing, CreateActivity};

/// Column list for `activities` queries.
const COLUMNS: &str = "\
    id, destination_id, name, description, price_cents, \
    created_at, updated_at";

/// Provides data access for the activity catalog.
pub struct ActivityRepo;

impl ActivityRepo {
    /// List one destination's activities, sorted by name ascending.
    ///
    /// An unknown destination yields an empty listing, not an error.
    pub async fn list_by_destination(
        pool: &PgPool,
        destination_id: &str,
    ) -> Result<ActivityListing, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activities \
             WHERE destination_id = $1 \
             ORDER BY name ASC, id ASC"
        );
        let rows = sqlx::query_as::<_, Activity>(&query)
            .bind(destination_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into())
    }

    /// List every activity, sorted by destination then name.
    pub async fn list_all(pool: &PgPool) -> Result<ActivityListing, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activities \
             ORDER BY destination_id ASC, name ASC, id ASC"
        );
        let rows = sqlx::query_as::<_, Activity>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into())
    }

    /// Fetch the activities matching `ids`. Unknown ids are simply absent
    /// from the result.
    pub async fn find_by_ids(pool: &PgPool, ids: &[String]) -> Result<Vec<Activity>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {COLUMNS} FROM activities WHERE id = ANY($1) ORDER BY id");
        sqlx::query_as::<_, Activity>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Insert a catalog entry.
    pub async fn create(pool: &PgPool, dto: &CreateActivity) -> Result<Activity, sqlx::Error> {
        let query = format!(
            "INSERT INTO activities (id, destination_id, name, description, price_cents) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(&dto.id)
            .bind(&dto.destination_id)
            .bind(&dto.name)
            .bind(&dto.description)
            .bind(dto.price_cents)
            .fetch_one(pool)
            .await
    }
}
