//! Driving port for submitting reviews.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{EntryId, Error, Rating, RatingHistogram, ReviewId, UserId};

/// Review submission as supplied by an inbound adapter.
///
/// The rating arrives unvalidated so that a missing or out-of-range value
/// can be reported as an invalid request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReviewRequest {
    pub entry_id: EntryId,
    pub user_id: UserId,
    pub rating: Option<i64>,
    pub comment: Option<String>,
}

/// Outcome of an accepted review, with the entry's refreshed aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReviewResponse {
    pub review_id: ReviewId,
    pub entry_id: EntryId,
    pub average_rating: Option<Rating>,
    pub histogram: RatingHistogram,
    pub review_count: usize,
}

/// Domain use-case port for review writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewCommand: Send + Sync {
    /// Validate and store a review, then recompute the entry's aggregates.
    ///
    /// Nothing is stored when the request fails.
    async fn submit_review(&self, request: SubmitReviewRequest)
    -> Result<SubmitReviewResponse, Error>;
}
