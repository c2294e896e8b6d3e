//! Field checks shared by the store and the HTTP layer.

use crate::errors::ValidationError;

/// Reject titles that are empty once surrounding whitespace is removed.
///
/// # Errors
///
/// Returns `ValidationError::EmptyTitle` for blank titles.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(())
}
