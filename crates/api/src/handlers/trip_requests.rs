//! Handlers for trip requests.
//!
//! Visitors submit a trip request from their cart; staff read, list and move
//! requests through the status lifecycle behind the admin gate.

use std::collections::HashMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tripdesk_core::error::CoreError;
use tripdesk_core::submission::{normalize_activity_ids, validate_contact, validate_notes};
use tripdesk_core::trip_status::validate_status;
use tripdesk_db::models::trip_request::{CreateTripRequest, TripRequest, UpdateTripStatus};
use tripdesk_db::repositories::{ActivityRepo, TripRequestRepo};

use crate::error::{AppError, AppResult, INTERNAL_ERROR_MESSAGE};
use crate::middleware::admin::RequireAdmin;
use crate::state::AppState;

/// `{ success: true, trip }` envelope for mutations.
#[derive(Debug, Serialize)]
pub struct TripMutationResponse {
    pub success: bool,
    pub trip: TripRequest,
}

/// Query parameters for `GET /trip-requests`.
#[derive(Debug, Deserialize)]
pub struct TripListQuery {
    pub status: Option<String>,
}

// ---------------------------------------------------------------------------
// Public submission
// ---------------------------------------------------------------------------

/// POST /trip-requests
///
/// Fold the visitor's selection and contact details into a new trip request
/// with status `new`. Every submitted activity must exist and belong to the
/// submitted destination.
pub async fn create_trip_request(
    State(state): State<AppState>,
    payload: Result<Json<CreateTripRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(mut input) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    input.destination = input.destination.trim().to_string();
    input.contact_email = input.contact_email.trim().to_string();
    validate_contact(&input.destination, &input.contact_name, &input.contact_email)?;
    validate_notes(input.notes.as_deref())?;
    input.activity_ids = normalize_activity_ids(&input.activity_ids)?;

    let found = ActivityRepo::find_by_ids(&state.pool, &input.activity_ids).await?;
    let destinations: HashMap<&str, &str> = found
        .iter()
        .map(|a| (a.id.as_str(), a.destination_id.as_str()))
        .collect();
    let rejected: Vec<&str> = input
        .activity_ids
        .iter()
        .map(String::as_str)
        .filter(|id| destinations.get(id) != Some(&input.destination.as_str()))
        .collect();
    if !rejected.is_empty() {
        return Err(AppError::Core(CoreError::InvalidInput(format!(
            "Unknown activities for destination {}: {}",
            input.destination,
            rejected.join(", ")
        ))));
    }

    let trip = TripRequestRepo::create(&state.pool, &input).await?;

    tracing::info!(
        trip_id = %trip.id,
        destination = %trip.destination,
        activity_count = trip.activity_ids.len(),
        "Trip request submitted",
    );

    Ok((
        StatusCode::CREATED,
        Json(TripMutationResponse {
            success: true,
            trip,
        }),
    ))
}

// ---------------------------------------------------------------------------
// Staff endpoints
// ---------------------------------------------------------------------------

/// GET /trip-requests/{id}
///
/// Return the full trip request row, or 404 `{ error: "Not found" }`.
pub async fn get_trip_request(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let trip = TripRequestRepo::find_by_id(&state.pool, &trip_id)
        .await?
        .ok_or(AppError::NotFound("Not found"))?;

    Ok(Json(trip))
}

/// PATCH /trip-requests/{id}/status
///
/// The status is validated before anything touches the database, so an
/// invalid value never reaches the row regardless of whether the id exists.
pub async fn update_trip_status(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
    payload: Result<Json<UpdateTripStatus>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let status = validate_status(input.candidate())?;

    let trip = TripRequestRepo::update_status(&state.pool, &trip_id, status)
        .await?
        .ok_or(AppError::NotFound("Trip not found"))?;

    tracing::info!(trip_id = %trip.id, status = %status, "Trip request status updated");

    Ok(Json(TripMutationResponse {
        success: true,
        trip,
    }))
}

/// GET /trip-requests/list-ids
///
/// Lightweight enumeration `{ status: "ok", count, trips: [{id, destination, createdAt}] }`
/// sorted by creation time. Failures answer `{ status: "error", error }` with
/// a 500 rather than the usual error envelope.
pub async fn list_trip_ids(_admin: RequireAdmin, State(state): State<AppState>) -> Response {
    match TripRequestRepo::list_summaries(&state.pool).await {
        Ok(trips) => Json(json!({
            "status": "ok",
            "count": trips.len(),
            "trips": trips,
        }))
        .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to list trip request ids");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "error",
                    "error": INTERNAL_ERROR_MESSAGE,
                })),
            )
                .into_response()
        }
    }
}

/// GET /trip-requests?status=<status>
///
/// Full rows for triage, newest first, optionally filtered by status.
pub async fn list_trip_requests(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<TripListQuery>,
) -> AppResult<impl IntoResponse> {
    let status = params.status.as_deref().map(validate_status).transpose()?;
    let trips = TripRequestRepo::list_by_status(&state.pool, status).await?;

    Ok(Json(json!({
        "count": trips.len(),
        "trips": trips,
    })))
}
