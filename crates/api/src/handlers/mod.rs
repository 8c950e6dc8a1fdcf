pub mod activities;
pub mod trip_requests;
