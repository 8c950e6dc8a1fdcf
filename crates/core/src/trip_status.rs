//! Trip request status domain and the guard that validates status writes.
//!
//! The domain is a fixed set of five values. Every status write goes through
//! [`validate_status`] first; repositories only accept the typed
//! [`TripStatus`], so an unrecognised string can never reach the database.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle status of a trip request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    New,
    Contacted,
    Quoted,
    Closed,
    Archived,
}

impl TripStatus {
    /// Every member of the status domain.
    pub const ALL: [TripStatus; 5] = [
        TripStatus::New,
        TripStatus::Contacted,
        TripStatus::Quoted,
        TripStatus::Closed,
        TripStatus::Archived,
    ];

    /// The stored and wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            TripStatus::New => "new",
            TripStatus::Contacted => "contacted",
            TripStatus::Quoted => "quoted",
            TripStatus::Closed => "closed",
            TripStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TripStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TripStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::InvalidStatus(s.to_string()))
    }
}

/// Validate a candidate status string against the fixed domain.
///
/// Matching is exact: no case folding, no trimming.
pub fn validate_status(candidate: &str) -> Result<TripStatus, CoreError> {
    candidate.parse()
}
