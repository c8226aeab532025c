//! Catalogue domain types.
//!
//! Entries, reviews and tags are validated on construction. Entries own
//! their reviews and the derived rating fields; tags are referenced by id.

use std::fmt;

mod entry;
mod ids;
mod review;
mod tag;
mod validation;


pub use entry::{CatalogueEntry, CatalogueEntryDraft};
pub use ids::{EntryId, ReviewId, TagId, UserId};
pub use review::{MAX_COMMENT_CHARS, Review, ReviewDraft};
pub use tag::{Tag, TagDraft};

/// Validation errors returned by catalogue constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueValidationError {
    InvalidSlug {
        field: &'static str,
    },
    EmptyField {
        field: &'static str,
    },
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    DuplicateReviewer {
        entry_id: EntryId,
        user_id: UserId,
    },
    ForeignReview {
        entry_id: EntryId,
        review_entry_id: EntryId,
    },
}

impl fmt::Display for CatalogueValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSlug { field } => write!(
                f,
                "{field} must contain lowercase ASCII letters, digits, and hyphens"
            ),
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
            Self::TooLong { field, max, actual } => write!(
                f,
                "{field} must be at most {max} characters (got {actual})"
            ),
            Self::DuplicateReviewer { entry_id, user_id } => write!(
                f,
                "user {user_id} has already reviewed entry {entry_id}"
            ),
            Self::ForeignReview {
                entry_id,
                review_entry_id,
            } => write!(
                f,
                "review for entry {review_entry_id} cannot be attached to entry {entry_id}"
            ),
        }
    }
}

impl std::error::Error for CatalogueValidationError {}
