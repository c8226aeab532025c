//! In-memory catalogue adapter.
//!
//! Stores entries and tags in id-keyed maps behind a [`tokio::sync::RwLock`].
//! Listings and lookups take the read lock and may run concurrently; writes
//! take the write lock. Implements the read, write and ingestion ports so a
//! single instance can back the whole catalogue.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::{
    CatalogueIngestionRepository, CatalogueIngestionRepositoryError, CatalogueRepository,
    CatalogueRepositoryError, CatalogueSnapshot,
};
use crate::domain::{CatalogueEntry, EntryId, ReviewId, Tag, TagId};

#[derive(Debug, Default)]
struct CatalogueState {
    entries: BTreeMap<EntryId, CatalogueEntry>,
    tags: BTreeMap<TagId, Tag>,
    last_review_id: u64,
}

impl CatalogueState {
    fn track_review_ids(&mut self, entry: &CatalogueEntry) {
        let highest = entry
            .reviews()
            .iter()
            .map(|review| review.id().get())
            .max()
            .unwrap_or_default();
        self.last_review_id = self.last_review_id.max(highest);
    }

    fn slug_owner(&self, slug: &str) -> Option<EntryId> {
        self.entries
            .values()
            .find(|entry| entry.slug() == slug)
            .map(CatalogueEntry::id)
    }
}

/// Catalogue store held entirely in process memory.
#[derive(Debug, Default)]
pub struct InMemoryCatalogueRepository {
    state: RwLock<CatalogueState>,
}

impl InMemoryCatalogueRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub async fn entry_count(&self) -> usize {
        self.state.read().await.entries.len()
    }
}

fn tag_key(name: &str) -> String {
    name.to_lowercase()
}

#[async_trait]
impl CatalogueRepository for InMemoryCatalogueRepository {
    async fn snapshot(&self) -> Result<CatalogueSnapshot, CatalogueRepositoryError> {
        let state = self.state.read().await;
        Ok(CatalogueSnapshot {
            entries: state.entries.values().cloned().collect(),
            tags: state.tags.values().cloned().collect(),
        })
    }

    async fn find_entry(
        &self,
        entry_id: EntryId,
    ) -> Result<Option<CatalogueEntry>, CatalogueRepositoryError> {
        Ok(self.state.read().await.entries.get(&entry_id).cloned())
    }

    async fn find_entry_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<CatalogueEntry>, CatalogueRepositoryError> {
        let state = self.state.read().await;
        Ok(state
            .slug_owner(slug)
            .and_then(|entry_id| state.entries.get(&entry_id).cloned()))
    }

    async fn next_review_id(&self) -> Result<ReviewId, CatalogueRepositoryError> {
        let mut state = self.state.write().await;
        let next = state
            .last_review_id
            .checked_add(1)
            .ok_or_else(|| CatalogueRepositoryError::query("review identifiers exhausted"))?;
        state.last_review_id = next;
        Ok(ReviewId::new(next))
    }

    async fn save_entry(&self, entry: &CatalogueEntry) -> Result<(), CatalogueRepositoryError> {
        let mut state = self.state.write().await;
        let Some(stored) = state.entries.get_mut(&entry.id()) else {
            return Err(CatalogueRepositoryError::query(format!(
                "catalogue entry {} does not exist",
                entry.id()
            )));
        };
        *stored = entry.clone();
        state.track_review_ids(entry);
        debug!(
            entry_id = %entry.id(),
            review_count = entry.review_count(),
            "catalogue entry saved"
        );
        Ok(())
    }
}

#[async_trait]
impl CatalogueIngestionRepository for InMemoryCatalogueRepository {
    async fn upsert_tags(&self, records: &[Tag]) -> Result<(), CatalogueIngestionRepositoryError> {
        let mut state = self.state.write().await;

        let mut owners: BTreeMap<String, TagId> = state
            .tags
            .values()
            .map(|tag| (tag_key(tag.name()), tag.id()))
            .collect();
        for tag in records {
            // Renaming a tag frees its old name.
            if let Some(previous) = state.tags.get(&tag.id()) {
                owners.remove(&tag_key(previous.name()));
            }
        }
        for tag in records {
            match owners.insert(tag_key(tag.name()), tag.id()) {
                Some(owner) if owner != tag.id() => {
                    return Err(CatalogueIngestionRepositoryError::duplicate_tag_name(
                        tag.name(),
                    ));
                }
                _ => {}
            }
        }

        for tag in records {
            state.tags.insert(tag.id(), tag.clone());
        }
        debug!(count = records.len(), "tags upserted");
        Ok(())
    }

    async fn upsert_entries(
        &self,
        records: &[CatalogueEntry],
    ) -> Result<(), CatalogueIngestionRepositoryError> {
        let mut state = self.state.write().await;

        let mut slugs: BTreeMap<&str, EntryId> = state
            .entries
            .values()
            .filter(|entry| !records.iter().any(|record| record.id() == entry.id()))
            .map(|entry| (entry.slug(), entry.id()))
            .collect();
        for entry in records {
            match slugs.insert(entry.slug(), entry.id()) {
                Some(owner) if owner != entry.id() => {
                    return Err(CatalogueIngestionRepositoryError::query(format!(
                        "slug {} already belongs to entry {owner}",
                        entry.slug()
                    )));
                }
                _ => {}
            }
        }
        drop(slugs);

        for entry in records {
            state.track_review_ids(entry);
            state.entries.insert(entry.id(), entry.clone());
        }
        debug!(count = records.len(), "catalogue entries upserted");
        Ok(())
    }
}
