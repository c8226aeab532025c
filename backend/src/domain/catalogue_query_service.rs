//! Catalogue listing domain service.
//!
//! Implements [`CatalogueQuery`] by filtering an in-memory snapshot and
//! slicing it into pages of the configured size.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{DEFAULT_PAGE_SIZE, PageRequest, PageRequestError, paginate};
use serde_json::json;
use tracing::debug;

use crate::domain::ports::{
    CatalogueQuery, CatalogueRepository, CatalogueRepositoryError, ListEntriesRequest,
    ListEntriesResponse,
};
use crate::domain::{CatalogueEntry, CatalogueFilter, EntryId, Error};

pub(crate) fn map_repository_error(error: CatalogueRepositoryError) -> Error {
    match error {
        CatalogueRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("catalogue repository unavailable: {message}"))
        }
        CatalogueRepositoryError::Query { message } => {
            Error::internal(format!("catalogue repository error: {message}"))
        }
    }
}

fn map_page_error(error: PageRequestError) -> Error {
    Error::invalid_request(error.to_string()).with_details(json!({ "field": "page" }))
}

/// Catalogue service implementing the [`CatalogueQuery`] driving port.
#[derive(Clone)]
pub struct CatalogueQueryService<R> {
    catalogue_repo: Arc<R>,
    page_size: usize,
}

impl<R> CatalogueQueryService<R> {
    /// Create a service paging with [`DEFAULT_PAGE_SIZE`].
    pub fn new(catalogue_repo: Arc<R>) -> Self {
        Self {
            catalogue_repo,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Use a different page size.
    ///
    /// # Errors
    /// Rejects sizes outside `1..=MAX_PAGE_SIZE`.
    pub fn with_page_size(mut self, page_size: usize) -> Result<Self, PageRequestError> {
        PageRequest::first(page_size)?;
        self.page_size = page_size;
        Ok(self)
    }

    /// Entries per listing page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

#[async_trait]
impl<R> CatalogueQuery for CatalogueQueryService<R>
where
    R: CatalogueRepository,
{
    async fn list_entries(
        &self,
        request: ListEntriesRequest,
    ) -> Result<ListEntriesResponse, Error> {
        let page_request = PageRequest::new(request.page.unwrap_or(1), self.page_size)
            .map_err(map_page_error)?;
        let filter = CatalogueFilter::new(
            request.search.as_deref().unwrap_or_default(),
            request.tag_ids,
        );

        let snapshot = self
            .catalogue_repo
            .snapshot()
            .await
            .map_err(map_repository_error)?;
        let filtered = filter.apply(snapshot.entries, &snapshot.tags);
        let total_matches = filtered.total();
        let applied_tag_ids = filtered.applied_tag_ids.into_iter().collect();
        let page = paginate(filtered.entries, page_request);

        debug!(
            search = filter.search().unwrap_or_default(),
            requested_tags = filter.tag_ids().len(),
            total_matches,
            page = page_request.number(),
            returned = page.len(),
            "catalogue listing served"
        );

        Ok(ListEntriesResponse {
            filter,
            applied_tag_ids,
            page,
        })
    }

    async fn find_entry(&self, entry_id: EntryId) -> Result<CatalogueEntry, Error> {
        self.catalogue_repo
            .find_entry(entry_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("catalogue entry {entry_id} not found")))
    }

    async fn find_entry_by_slug(&self, slug: &str) -> Result<CatalogueEntry, Error> {
        self.catalogue_repo
            .find_entry_by_slug(slug)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("catalogue entry {slug} not found")))
    }
}

#[cfg(test)]
#[path = "catalogue_query_service_tests.rs"]
mod tests;
