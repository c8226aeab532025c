//! Search and tag filtering over catalogue entries.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::catalogue::{CatalogueEntry, Tag, TagId};

/// Filter criteria for catalogue listings.
///
/// The search clause is a case-insensitive substring match on the title.
/// The tag clause keeps entries carrying at least one requested tag. Both
/// clauses must hold. Empty criteria match everything.
///
/// # Examples
/// ```
/// use game_catalogue::domain::{CatalogueFilter, TagId};
///
/// let filter = CatalogueFilter::new("  Zelda ", [TagId::new(2)]);
/// assert_eq!(filter.search(), Some("Zelda"));
/// assert_eq!(filter.tag_ids().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<String>,
    tag_ids: BTreeSet<TagId>,
}

/// Entries matching a [`CatalogueFilter`], in ascending id order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredEntries {
    /// Matching entries.
    pub entries: Vec<CatalogueEntry>,
    /// Requested tag ids that exist in the tag universe.
    pub applied_tag_ids: BTreeSet<TagId>,
}

impl FilteredEntries {
    /// Number of matching entries across all pages.
    pub fn total(&self) -> usize {
        self.entries.len()
    }
}

impl CatalogueFilter {
    /// Build a filter. Surrounding whitespace in `search` is dropped and a
    /// blank search is treated as absent.
    pub fn new(search: impl AsRef<str>, tag_ids: impl IntoIterator<Item = TagId>) -> Self {
        let trimmed = search.as_ref().trim();
        Self {
            search: (!trimmed.is_empty()).then(|| trimmed.to_owned()),
            tag_ids: tag_ids.into_iter().collect(),
        }
    }

    /// Trimmed search text, `None` when blank.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Requested tag ids, before unknown ids are discarded.
    pub fn tag_ids(&self) -> &BTreeSet<TagId> {
        &self.tag_ids
    }

    /// Requested tag ids that name a tag in `known_tags`.
    pub fn resolve_tags(&self, known_tags: &[Tag]) -> BTreeSet<TagId> {
        let known: BTreeSet<TagId> = known_tags.iter().map(Tag::id).collect();
        self.tag_ids.intersection(&known).copied().collect()
    }

    /// Keep the entries that satisfy both clauses, ordered by ascending id.
    ///
    /// Tag ids missing from `known_tags` are ignored. When none of the
    /// requested ids is known the tag clause matches every entry.
    pub fn apply(
        &self,
        entries: impl IntoIterator<Item = CatalogueEntry>,
        known_tags: &[Tag],
    ) -> FilteredEntries {
        let applied_tag_ids = self.resolve_tags(known_tags);
        let needle = self.search.as_deref().map(str::to_lowercase);

        let mut matches: Vec<CatalogueEntry> = entries
            .into_iter()
            .filter(|entry| matches_search(entry, needle.as_deref()))
            .filter(|entry| applied_tag_ids.is_empty() || entry.has_any_tag(&applied_tag_ids))
            .collect();
        matches.sort_by_key(CatalogueEntry::id);

        FilteredEntries {
            entries: matches,
            applied_tag_ids,
        }
    }
}

fn matches_search(entry: &CatalogueEntry, needle: Option<&str>) -> bool {
    needle.is_none_or(|needle| entry.title().to_lowercase().contains(needle))
}
