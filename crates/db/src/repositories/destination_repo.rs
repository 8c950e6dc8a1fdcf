//! Repository for the `destinations` table.

use sqlx::PgPool;

use crate::models::destination::{CreateDestination, Destination};

/// Column list for `destinations` queries.
const COLUMNS: &str = "id, name, created_at";

/// Provides data access for destinations.
pub struct DestinationRepo;

impl DestinationRepo {
    /// Insert a destination, or rename it if the id already exists.
    pub async fn upsert(pool: &PgPool, dto: &CreateDestination) -> Result<Destination, sqlx::Error> {
        let query = format!(
            "INSERT INTO destinations (id, name) VALUES ($1, $2) \
             ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Destination>(&query)
            .bind(&dto.id)
            .bind(&dto.name)
            .fetch_one(pool)
            .await
    }

    /// List all destinations ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Destination>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM destinations ORDER BY name, id");
        sqlx::query_as::<_, Destination>(&query)
            .fetch_all(pool)
            .await
    }
}
