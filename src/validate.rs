//! Shared validation for ticket submission fields.
//!
//! These rules run at the form boundary before anything reaches the store,
//! so a bad field is reported inline against its input rather than through
//! the transition coordinator's notification path.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{HelpdeskError, Result};

pub const MIN_TITLE_LENGTH: usize = 3;
pub const MAX_TITLE_LENGTH: usize = 200;

pub const MIN_DESCRIPTION_LENGTH: usize = 10;
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

pub const MAX_CONTACT_LENGTH: usize = 100;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should be valid"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]\d{0,15}$").expect("phone regex should be valid"));

/// Validates a ticket title: 3-200 characters after trimming.
pub fn validate_title(title: &str) -> Result<()> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(HelpdeskError::validation("title", "Title is required."));
    }
    if trimmed.chars().count() < MIN_TITLE_LENGTH {
        return Err(HelpdeskError::validation(
            "title",
            format!("Title must be at least {MIN_TITLE_LENGTH} characters."),
        ));
    }
    if trimmed.chars().count() > MAX_TITLE_LENGTH {
        return Err(HelpdeskError::validation(
            "title",
            format!("Title cannot exceed {MAX_TITLE_LENGTH} characters."),
        ));
    }
    Ok(())
}

/// Validates a ticket description: 10-1000 characters after trimming.
pub fn validate_description(description: &str) -> Result<()> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(HelpdeskError::validation(
            "description",
            "Description is required.",
        ));
    }
    if trimmed.chars().count() < MIN_DESCRIPTION_LENGTH {
        return Err(HelpdeskError::validation(
            "description",
            format!("Description must be at least {MIN_DESCRIPTION_LENGTH} characters."),
        ));
    }
    if trimmed.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(HelpdeskError::validation(
            "description",
            format!("Description cannot exceed {MAX_DESCRIPTION_LENGTH} characters."),
        ));
    }
    Ok(())
}

/// Validates contact information: at most 100 characters, and syntactically
/// either an email address or a phone number. Separators commonly typed in
/// phone numbers (spaces, dashes, parens) are stripped before the check.
pub fn validate_contact(contact: &str) -> Result<()> {
    let trimmed = contact.trim();
    if trimmed.is_empty() {
        return Err(HelpdeskError::validation(
            "contact_information",
            "Contact Information is required.",
        ));
    }
    if trimmed.chars().count() > MAX_CONTACT_LENGTH {
        return Err(HelpdeskError::validation(
            "contact_information",
            format!("Contact Information cannot exceed {MAX_CONTACT_LENGTH} characters."),
        ));
    }

    let digits: String = trimmed
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();

    if !EMAIL_RE.is_match(trimmed) && !PHONE_RE.is_match(&digits) {
        return Err(HelpdeskError::validation(
            "contact_information",
            "Please enter a valid email address or phone number.",
        ));
    }
    Ok(())
}

/// Validates a whole submission, reporting the first failing field.
pub fn validate_submission(title: &str, description: &str, contact: &str) -> Result<()> {
    validate_title(title)?;
    validate_description(description)?;
    validate_contact(contact)?;
    Ok(())
}
