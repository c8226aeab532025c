//! Driving port for catalogue listings and single-entry lookups.

use async_trait::async_trait;
use pagination::Page;
use serde::Serialize;

use crate::domain::{CatalogueEntry, CatalogueFilter, EntryId, Error, TagId};

/// Listing request as supplied by an inbound adapter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListEntriesRequest {
    /// Free-text title search; blank means no search.
    pub search: Option<String>,
    /// Requested tag ids; unknown ids are ignored.
    pub tag_ids: Vec<TagId>,
    /// 1-indexed page number; `None` means the first page.
    pub page: Option<usize>,
}

/// One page of matching entries plus the filter that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntriesResponse {
    /// The normalised filter, echoing the request.
    pub filter: CatalogueFilter,
    /// Requested tag ids that matched a known tag.
    pub applied_tag_ids: Vec<TagId>,
    pub page: Page<CatalogueEntry>,
}

/// Domain use-case port for reading the catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueQuery: Send + Sync {
    /// Filter, order and paginate the catalogue.
    ///
    /// A page past the last one is empty rather than an error. Page `0` is
    /// rejected as an invalid request.
    async fn list_entries(&self, request: ListEntriesRequest)
    -> Result<ListEntriesResponse, Error>;

    /// Fetch a single entry, failing with `not_found` when absent.
    async fn find_entry(&self, entry_id: EntryId) -> Result<CatalogueEntry, Error>;

    /// Fetch a single entry by slug, failing with `not_found` when absent.
    async fn find_entry_by_slug(&self, slug: &str) -> Result<CatalogueEntry, Error>;
}
