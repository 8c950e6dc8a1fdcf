/// Activity, destination and trip request identifiers are opaque text keys.
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
