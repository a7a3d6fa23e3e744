//! User payload validation

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors that can occur during user payload validation
///
/// The display strings double as the user-facing messages returned by the
/// API, so they are phrased for humans rather than for logs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("Name is required")]
    MissingName,

    #[error("Valid email is required")]
    InvalidEmail,

    #[error("City is required")]
    MissingCity,

    #[error("State is required")]
    MissingState,
}

// local-part@domain with dot/hyphen separated words and a 2-3 letter TLD
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\w+([\.-]?\w+)*@\w+([\.-]?\w+)*(\.\w{2,3})+$")
        .expect("email pattern is a valid regex")
});

/// Validate a user's display name: present and non-blank after trimming.
pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    if name.trim().is_empty() {
        return Err(UserValidationError::MissingName);
    }
    Ok(())
}

/// Validate an email address against the local-part@domain pattern.
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if !EMAIL_PATTERN.is_match(email) {
        return Err(UserValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validate a city: present and non-blank after trimming.
pub fn validate_city(city: &str) -> Result<(), UserValidationError> {
    if city.trim().is_empty() {
        return Err(UserValidationError::MissingCity);
    }
    Ok(())
}

/// Validate a state: present and non-blank after trimming.
///
/// Both abbreviations ("NY") and full names ("New York") are accepted;
/// the value is stored as given.
pub fn validate_state(state: &str) -> Result<(), UserValidationError> {
    if state.trim().is_empty() {
        return Err(UserValidationError::MissingState);
    }
    Ok(())
}
