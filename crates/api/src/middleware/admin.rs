//! Cookie-based admin gate for staff endpoints.
//!
//! The check is a single boolean predicate over request metadata: does the
//! `admin_session` cookie equal the configured token? Handlers opt in by
//! taking [`RequireAdmin`] as an extractor.

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::error::AppError;
use crate::state::AppState;

/// Name of the cookie carrying the admin session token.
pub const ADMIN_COOKIE: &str = "admin_session";

/// Marker extractor: present only when the request passed the admin gate.
///
/// ```ignore
/// async fn staff_only(_admin: RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if is_admin(&parts.headers, state.config.admin_token.as_deref()) {
            Ok(RequireAdmin)
        } else {
            tracing::warn!(path = %parts.uri.path(), "Admin gate rejected request");
            Err(AppError::Unauthorized)
        }
    }
}

/// Whether `headers` carry the admin cookie matching `expected`.
///
/// With no configured token every request passes.
pub fn is_admin(headers: &HeaderMap, expected: Option<&str>) -> bool {
    let Some(expected) = expected else {
        return true;
    };
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .any(|(name, value)| name == ADMIN_COOKIE && value == expected)
}
