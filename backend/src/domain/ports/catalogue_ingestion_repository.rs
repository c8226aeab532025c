//! Port abstraction for bulk catalogue writes.
//!
//! Example-data seeding uses this port to materialise tags and entries
//! without knowing which store backs the catalogue.

use async_trait::async_trait;

use crate::domain::{CatalogueEntry, Tag};

use super::define_port_error;

define_port_error! {
    /// Errors raised when persisting catalogue ingestion payloads.
    pub enum CatalogueIngestionRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "catalogue ingestion connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "catalogue ingestion query failed: {message}",
        /// A tag name is already held by a different tag id.
        DuplicateTagName { name: String } =>
            "tag name {name} is already in use",
    }
}

/// Port for writing catalogue records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueIngestionRepository: Send + Sync {
    /// Persist tags keyed by tag identifier.
    ///
    /// Existing tags are updated with incoming values. Tag names stay unique
    /// across the tag universe, compared case-insensitively.
    async fn upsert_tags(&self, records: &[Tag]) -> Result<(), CatalogueIngestionRepositoryError>;

    /// Persist entries keyed by entry identifier, reviews included.
    ///
    /// Existing entries are replaced wholesale.
    async fn upsert_entries(
        &self,
        records: &[CatalogueEntry],
    ) -> Result<(), CatalogueIngestionRepositoryError>;
}
