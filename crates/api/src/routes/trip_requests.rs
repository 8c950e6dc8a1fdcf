//! Route definitions for trip requests, served under `/trip-requests`.
//!
//! The static `/list-ids` segment takes precedence over `/{id}`.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::trip_requests;
use crate::state::AppState;

/// ```text
/// GET   /trip-requests              -> list_trip_requests
/// POST  /trip-requests              -> create_trip_request
/// GET   /trip-requests/list-ids     -> list_trip_ids
/// GET   /trip-requests/{id}         -> get_trip_request
/// PATCH /trip-requests/{id}/status  -> update_trip_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/trip-requests",
            get(trip_requests::list_trip_requests).post(trip_requests::create_trip_request),
        )
        .route("/trip-requests/list-ids", get(trip_requests::list_trip_ids))
        .route("/trip-requests/{id}", get(trip_requests::get_trip_request))
        .route("/trip-requests/{id}/status", patch(trip_requests::update_trip_status))
}
