//! Tripdesk domain layer.
//!
//! Holds the types shared by the database and API crates: identifiers,
//! the [`error::CoreError`] taxonomy, and the trip request status guard.

pub mod error;
pub mod submission;
pub mod trip_status;
pub mod types;
