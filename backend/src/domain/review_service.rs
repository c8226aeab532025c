//! Review submission domain service.
//!
//! Implements the [`ReviewCommand`] and [`ReviewQuery`] driving ports.
//! Submissions are serialised through a write gate so that only one
//! load-append-recompute-save cycle runs at a time.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Mutex;
use tracing::{info, warn};

use super::catalogue_query_service::map_repository_error;
use crate::domain::ports::{
    CatalogueRepository, ReviewCommand, ReviewQuery, SubmitReviewRequest, SubmitReviewResponse,
};
use crate::domain::{
    CatalogueEntry, CatalogueValidationError, EntryId, Error, MAX_COMMENT_CHARS, Rating, Review,
    ReviewDraft, UserId,
};

fn parse_rating(raw: Option<i64>) -> Result<Rating, Error> {
    let value = raw.ok_or_else(|| {
        Error::invalid_request("rating is required").with_details(json!({ "field": "rating" }))
    })?;
    Rating::try_from(value).map_err(|err| {
        Error::invalid_request(err.to_string()).with_details(json!({
            "field": "rating",
            "value": value,
        }))
    })
}

fn check_comment_length(comment: Option<&str>) -> Result<(), Error> {
    let length = comment.map_or(0, |text| text.trim().chars().count());
    if length > MAX_COMMENT_CHARS {
        return Err(Error::invalid_request(format!(
            "comment must be at most {MAX_COMMENT_CHARS} characters"
        ))
        .with_details(json!({
            "field": "comment",
            "length": length,
        })));
    }
    Ok(())
}

fn already_reviewed(entry_id: EntryId, user_id: UserId) -> Error {
    Error::conflict("user has already reviewed this entry").with_details(json!({
        "entryId": entry_id,
        "userId": user_id,
        "code": "duplicate_review",
    }))
}

fn map_validation_error(error: CatalogueValidationError) -> Error {
    match error {
        CatalogueValidationError::DuplicateReviewer { entry_id, user_id } => {
            already_reviewed(entry_id, user_id)
        }
        CatalogueValidationError::TooLong { .. } | CatalogueValidationError::EmptyField { .. } => {
            Error::invalid_request(error.to_string())
        }
        other => Error::internal(format!("review could not be attached: {other}")),
    }
}

/// Review service implementing the review driving ports.
pub struct ReviewService<R> {
    catalogue_repo: Arc<R>,
    write_gate: Mutex<()>,
}

impl<R> ReviewService<R> {
    /// Create a new service over the catalogue repository.
    pub fn new(catalogue_repo: Arc<R>) -> Self {
        Self {
            catalogue_repo,
            write_gate: Mutex::new(()),
        }
    }
}

impl<R> ReviewService<R>
where
    R: CatalogueRepository,
{
    async fn load_entry(&self, entry_id: EntryId) -> Result<CatalogueEntry, Error> {
        self.catalogue_repo
            .find_entry(entry_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("catalogue entry {entry_id} not found")))
    }
}

#[async_trait]
impl<R> ReviewCommand for ReviewService<R>
where
    R: CatalogueRepository,
{
    async fn submit_review(
        &self,
        request: SubmitReviewRequest,
    ) -> Result<SubmitReviewResponse, Error> {
        let SubmitReviewRequest {
            entry_id,
            user_id,
            rating,
            comment,
        } = request;
        let rating = parse_rating(rating)?;
        check_comment_length(comment.as_deref())?;

        let _guard = self.write_gate.lock().await;
        let mut entry = self.load_entry(entry_id).await?;
        if entry.has_review_from(user_id) {
            warn!(%entry_id, %user_id, "duplicate review rejected");
            return Err(already_reviewed(entry_id, user_id));
        }

        let review_id = self
            .catalogue_repo
            .next_review_id()
            .await
            .map_err(map_repository_error)?;
        let review = Review::new(ReviewDraft {
            id: review_id,
            entry_id,
            user_id,
            rating,
            comment,
        })
        .map_err(map_validation_error)?;
        entry.add_review(review).map_err(map_validation_error)?;

        self.catalogue_repo
            .save_entry(&entry)
            .await
            .map_err(map_repository_error)?;

        info!(
            %entry_id,
            %review_id,
            rating = rating.value(),
            review_count = entry.review_count(),
            "review accepted"
        );

        Ok(SubmitReviewResponse {
            review_id,
            entry_id,
            average_rating: entry.average_rating(),
            histogram: *entry.histogram(),
            review_count: entry.review_count(),
        })
    }
}

#[async_trait]
impl<R> ReviewQuery for ReviewService<R>
where
    R: CatalogueRepository,
{
    async fn has_reviewed(&self, entry_id: EntryId, user_id: UserId) -> Result<bool, Error> {
        let entry = self.load_entry(entry_id).await?;
        Ok(entry.has_review_from(user_id))
    }
}

#[cfg(test)]
#[path = "review_service_tests.rs"]
mod tests;
