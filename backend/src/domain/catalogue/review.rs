//! Review entity.

use serde::{Deserialize, Serialize};

use super::validation::normalise_optional_text;
use super::{CatalogueValidationError, EntryId, ReviewId, UserId};
use crate::domain::Rating;

/// Longest accepted review comment, counted in characters.
pub const MAX_COMMENT_CHARS: usize = 3000;

/// Input payload for [`Review::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ReviewDraft {
    pub id: ReviewId,
    pub entry_id: EntryId,
    pub user_id: UserId,
    pub rating: Rating,
    #[serde(default)]
    pub comment: Option<String>,
}

/// A user's rating of one catalogue entry, optionally with a comment.
///
/// The rating type is closed, so only comment length can fail validation.
/// Blank comments are stored as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    id: ReviewId,
    entry_id: EntryId,
    user_id: UserId,
    rating: Rating,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

impl Review {
    /// Validate and construct a review. The comment is trimmed.
    pub fn new(draft: ReviewDraft) -> Result<Self, CatalogueValidationError> {
        Self::try_from(draft)
    }

    /// Review identifier.
    pub fn id(&self) -> ReviewId {
        self.id
    }
    /// Entry the review belongs to.
    pub fn entry_id(&self) -> EntryId {
        self.entry_id
    }
    /// Author of the review.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }
    /// Star rating between 1 and 5.
    pub fn rating(&self) -> Rating {
        self.rating
    }
    /// Optional comment; blank comments are stored as `None`.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

impl TryFrom<ReviewDraft> for Review {
    type Error = CatalogueValidationError;

    fn try_from(draft: ReviewDraft) -> Result<Self, Self::Error> {
        let comment = normalise_optional_text(draft.comment, MAX_COMMENT_CHARS, "review.comment")?;
        Ok(Self {
            id: draft.id,
            entry_id: draft.entry_id,
            user_id: draft.user_id,
            rating: draft.rating,
            comment,
        })
    }
}

impl<'de> Deserialize<'de> for Review {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        ReviewDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}
