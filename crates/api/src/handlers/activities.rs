//! Handlers for the activity catalog.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tripdesk_db::repositories::ActivityRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /activities`.
#[derive(Debug, Deserialize)]
pub struct ActivityQuery {
    #[serde(rename = "destinationId")]
    pub destination_id: Option<String>,
}

/// GET /activities?destinationId=<id>
///
/// Lists one destination's activities by name, or every activity by
/// destination then name when the parameter is omitted or blank. Responds
/// with `{ activities, count }`.
pub async fn list_activities(
    State(state): State<AppState>,
    query: Result<Query<ActivityQuery>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let destination = params
        .destination_id
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());

    let listing = match destination {
        Some(destination_id) => ActivityRepo::list_by_destination(&state.pool, destination_id).await?,
        None => ActivityRepo::list_all(&state.pool).await?,
    };

    tracing::debug!(
        destination_id = destination.unwrap_or("*"),
        count = listing.count,
        "Listed activities",
    );

    Ok(Json(listing))
}
