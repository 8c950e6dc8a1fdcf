//! Validation rules for trip request submissions.
//!
//! A submission folds the visitor's cart into a new trip request. These checks
//! run in the API layer before anything is inserted.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Upper bound on the number of activities one trip request may reference.
pub const MAX_ACTIVITIES_PER_REQUEST: usize = 50;

/// Maximum length of the contact name, in characters.
pub const MAX_CONTACT_NAME_LEN: usize = 200;

/// Maximum length of the free-form notes field, in characters.
pub const MAX_NOTES_LEN: usize = 4000;

/// Validate the contact and destination fields of a submission.
pub fn validate_contact(
    destination: &str,
    contact_name: &str,
    contact_email: &str,
) -> Result<(), CoreError> {
    if destination.trim().is_empty() {
        return Err(CoreError::InvalidInput("destination is required".into()));
    }
    let name = contact_name.trim();
    if name.is_empty() {
        return Err(CoreError::InvalidInput("contactName is required".into()));
    }
    if name.chars().count() > MAX_CONTACT_NAME_LEN {
        return Err(CoreError::InvalidInput(format!(
            "contactName must be at most {MAX_CONTACT_NAME_LEN} characters"
        )));
    }
    if !contact_email.validate_email() {
        return Err(CoreError::InvalidInput(
            "contactEmail is not a valid email address".into(),
        ));
    }
    Ok(())
}

/// Validate optional notes.
pub fn validate_notes(notes: Option<&str>) -> Result<(), CoreError> {
    match notes {
        Some(n) if n.chars().count() > MAX_NOTES_LEN => Err(CoreError::InvalidInput(format!(
            "notes must be at most {MAX_NOTES_LEN} characters"
        ))),
        _ => Ok(()),
    }
}

/// Drop duplicate activity ids, keeping the first occurrence of each, and
/// enforce the per-request limit.
///
/// An empty selection is allowed: visitors may ask for a quote before picking
/// anything.
pub fn normalize_activity_ids(ids: &[String]) -> Result<Vec<String>, CoreError> {
    let mut seen = std::collections::HashSet::new();
    let unique: Vec<String> = ids
        .iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect();

    if unique.iter().any(|id| id.trim().is_empty()) {
        return Err(CoreError::InvalidInput(
            "activityIds must not contain empty identifiers".into(),
        ));
    }
    if unique.len() > MAX_ACTIVITIES_PER_REQUEST {
        return Err(CoreError::InvalidInput(format!(
            "a trip request may reference at most {MAX_ACTIVITIES_PER_REQUEST} activities"
        )));
    }
    Ok(unique)
}
