pub mod activity;
pub mod destination;
pub mod trip_request;
