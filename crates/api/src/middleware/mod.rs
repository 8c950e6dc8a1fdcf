//! Request extractors that gate handlers.
//!
//! - [`admin::RequireAdmin`] -- Requires a valid `admin_session` cookie.

pub mod admin;
