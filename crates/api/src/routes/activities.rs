//! Route definitions for the activity catalog, served at `/activities`.

use axum::routing::get;
use axum::Router;

use crate::handlers::activities;
use crate::state::AppState;

/// ```text
/// GET /activities  -> list_activities
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/activities", get(activities::list_activities))
}
