//! Validation helpers shared by catalogue entities.

use super::CatalogueValidationError;
use crate::domain::slug::is_valid_slug;

pub(super) fn validate_slug(
    value: String,
    field: &'static str,
) -> Result<String, CatalogueValidationError> {
    if !is_valid_slug(&value) {
        return Err(CatalogueValidationError::InvalidSlug { field });
    }
    Ok(value)
}

pub(super) fn validate_non_empty_field(
    value: String,
    field: &'static str,
) -> Result<String, CatalogueValidationError> {
    if value.trim().is_empty() {
        return Err(CatalogueValidationError::EmptyField { field });
    }
    Ok(value)
}

/// Trim `value`, mapping blank text to `None` and enforcing a character cap.
pub(super) fn normalise_optional_text(
    value: Option<String>,
    max: usize,
    field: &'static str,
) -> Result<Option<String>, CatalogueValidationError> {
    let Some(text) = value else {
        return Ok(None);
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let actual = trimmed.chars().count();
    if actual > max {
        return Err(CatalogueValidationError::TooLong { field, max, actual });
    }
    Ok(Some(trimmed.to_owned()))
}
