pub mod activities;
pub mod health;
pub mod trip_requests;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /activities                        list (public, ?destinationId=)
///
/// /trip-requests                     list (admin, ?status=), submit (public)
/// /trip-requests/list-ids            id summaries (admin)
/// /trip-requests/{id}                get (admin)
/// /trip-requests/{id}/status         update status (admin, PATCH)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(activities::router())
        .merge(trip_requests::router())
}
