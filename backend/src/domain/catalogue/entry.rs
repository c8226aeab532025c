//! Catalogue entry aggregate.

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validation::{validate_non_empty_field, validate_slug};
use super::{CatalogueValidationError, EntryId, Review, TagId, UserId};
use crate::domain::slug::slugify;
use crate::domain::{Rating, RatingAggregator, RatingHistogram};

/// Input payload for [`CatalogueEntry::new`].
///
/// When `slug` is omitted it is derived from the title, or from the id
/// (`entry-{id}`) when the title has no Latin letters or digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueEntryDraft {
    pub id: EntryId,
    #[serde(default)]
    pub slug: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub release_date: NaiveDate,
    #[serde(default)]
    pub tag_ids: Vec<TagId>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// A game in the catalogue together with its reviews and rating aggregates.
///
/// ## Invariants
/// - `average_rating` is `None` exactly when there are no reviews.
/// - Histogram buckets sum to the review count.
/// - `tag_ids` holds no duplicates and keeps first-insertion order.
/// - No user has more than one review on the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueEntry {
    id: EntryId,
    slug: String,
    title: String,
    description: String,
    release_date: NaiveDate,
    average_rating: Option<Rating>,
    rating_histogram: RatingHistogram,
    tag_ids: Vec<TagId>,
    reviews: Vec<Review>,
}

impl CatalogueEntry {
    /// Validate and construct an entry, computing its rating aggregates.
    pub fn new(draft: CatalogueEntryDraft) -> Result<Self, CatalogueValidationError> {
        Self::try_from(draft)
    }

    /// Catalogue identifier.
    pub fn id(&self) -> EntryId {
        self.id
    }
    /// URL-safe slug.
    pub fn slug(&self) -> &str {
        self.slug.as_str()
    }
    /// Display title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }
    /// Free-text description; may be empty.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
    /// Release date.
    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }
    /// Mean review rating, `None` until the first review.
    pub fn average_rating(&self) -> Option<Rating> {
        self.average_rating
    }
    /// Review count per star value.
    pub fn histogram(&self) -> &RatingHistogram {
        &self.rating_histogram
    }
    /// Attached tags in first-insertion order.
    pub fn tag_ids(&self) -> &[TagId] {
        &self.tag_ids
    }
    /// Reviews in submission order.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }
    /// Number of reviews.
    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    /// Whether `user_id` has already reviewed this entry.
    pub fn has_review_from(&self, user_id: UserId) -> bool {
        self.reviews.iter().any(|review| review.user_id() == user_id)
    }

    /// Append a review and recompute the rating aggregates.
    ///
    /// # Errors
    /// Rejects a second review from the same user and reviews that belong to
    /// another entry. The entry is unchanged on error.
    pub fn add_review(&mut self, review: Review) -> Result<(), CatalogueValidationError> {
        self.ensure_review_fits(&review)?;
        self.reviews.push(review);
        RatingAggregator::recompute(self);
        Ok(())
    }

    /// Attach `tag_id` unless already present.
    pub fn add_tag(&mut self, tag_id: TagId) -> bool {
        if self.tag_ids.contains(&tag_id) {
            return false;
        }
        self.tag_ids.push(tag_id);
        true
    }

    /// Whether any of the entry's tags is in `wanted`.
    pub fn has_any_tag(&self, wanted: &BTreeSet<TagId>) -> bool {
        self.tag_ids.iter().any(|tag_id| wanted.contains(tag_id))
    }

    pub(crate) fn set_average_rating(&mut self, average: Option<Rating>) {
        self.average_rating = average;
    }

    pub(crate) fn set_histogram(&mut self, histogram: RatingHistogram) {
        self.rating_histogram = histogram;
    }

    fn ensure_review_fits(&self, review: &Review) -> Result<(), CatalogueValidationError> {
        if review.entry_id() != self.id {
            return Err(CatalogueValidationError::ForeignReview {
                entry_id: self.id,
                review_entry_id: review.entry_id(),
            });
        }
        if self.has_review_from(review.user_id()) {
            return Err(CatalogueValidationError::DuplicateReviewer {
                entry_id: self.id,
                user_id: review.user_id(),
            });
        }
        Ok(())
    }
}

impl TryFrom<CatalogueEntryDraft> for CatalogueEntry {
    type Error = CatalogueValidationError;

    fn try_from(draft: CatalogueEntryDraft) -> Result<Self, Self::Error> {
        let title = validate_non_empty_field(draft.title, "catalogue_entry.title")?;
        let slug = match draft.slug {
            Some(slug) => slug,
            None => slugify(&title).unwrap_or_else(|| format!("entry-{}", draft.id)),
        };
        let slug = validate_slug(slug, "catalogue_entry.slug")?;

        let mut seen = HashSet::new();
        let tag_ids = draft
            .tag_ids
            .into_iter()
            .filter(|tag_id| seen.insert(*tag_id))
            .collect();

        let mut entry = Self {
            id: draft.id,
            slug,
            title,
            description: draft.description,
            release_date: draft.release_date,
            average_rating: None,
            rating_histogram: RatingHistogram::default(),
            tag_ids,
            reviews: Vec::with_capacity(draft.reviews.len()),
        };
        for review in draft.reviews {
            entry.ensure_review_fits(&review)?;
            entry.reviews.push(review);
        }
        RatingAggregator::recompute(&mut entry);
        Ok(entry)
    }
}

impl<'de> Deserialize<'de> for CatalogueEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        CatalogueEntryDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}
