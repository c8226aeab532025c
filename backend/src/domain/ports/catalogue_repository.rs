//! Driven port for reading and updating catalogue entries.
//!
//! Review submission loads a single entry, mutates it in the domain, then
//! writes it back through [`CatalogueRepository::save_entry`]. Listings read
//! a full snapshot and filter in memory.

use async_trait::async_trait;

use crate::domain::{CatalogueEntry, EntryId, ReviewId, Tag};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading or updating catalogue entries.
    pub enum CatalogueRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "catalogue repository connection failed: {message}",
        /// Query failed during execution or record conversion.
        Query { message: String } =>
            "catalogue repository query failed: {message}",
    }
}

/// Entries and the tag universe read at a single point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogueSnapshot {
    pub entries: Vec<CatalogueEntry>,
    pub tags: Vec<Tag>,
}

/// Port for catalogue reads and entry updates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueRepository: Send + Sync {
    /// Return every entry together with every known tag.
    ///
    /// Entries are ordered by ascending id. An empty catalogue yields empty
    /// vectors rather than an error.
    async fn snapshot(&self) -> Result<CatalogueSnapshot, CatalogueRepositoryError>;

    /// Look up one entry by id.
    async fn find_entry(
        &self,
        entry_id: EntryId,
    ) -> Result<Option<CatalogueEntry>, CatalogueRepositoryError>;

    /// Look up one entry by slug.
    async fn find_entry_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<CatalogueEntry>, CatalogueRepositoryError>;

    /// Reserve a review identifier not yet used by any stored review.
    async fn next_review_id(&self) -> Result<ReviewId, CatalogueRepositoryError>;

    /// Replace the stored entry that shares `entry`'s id.
    ///
    /// Saving an entry that was never ingested is a query error.
    async fn save_entry(&self, entry: &CatalogueEntry) -> Result<(), CatalogueRepositoryError>;
}
