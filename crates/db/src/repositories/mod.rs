//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod activity_repo;
pub mod destination_repo;
pub mod trip_request_repo;

pub use activity_repo::ActivityRepo;
pub use destination_repo::DestinationRepo;
pub use trip_request_repo::TripRequestRepo;
