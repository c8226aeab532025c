//! JSON listing document handed to presentation collaborators.

use pagination::{PAGE_QUERY_PARAM, PageLinks, PageMeta};
use serde::Serialize;
use url::Url;

use crate::domain::ports::{ListEntriesRequest, ListEntriesResponse};
use crate::domain::{CatalogueEntry, CatalogueFilter, TagId};

/// Query parameter carrying the search text.
pub const SEARCH_QUERY_PARAM: &str = "search";
/// Query parameter carrying one requested tag id; repeated per tag.
pub const TAG_QUERY_PARAM: &str = "tag";

/// One page of the catalogue with navigation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueListing {
    pub filter: CatalogueFilter,
    pub applied_tag_ids: Vec<TagId>,
    pub entries: Vec<CatalogueEntry>,
    pub meta: PageMeta,
    pub links: PageLinks,
}

impl CatalogueListing {
    /// Assemble the document, deriving links from `request_url`.
    pub fn new(response: ListEntriesResponse, request_url: &Url) -> Self {
        let (entries, meta) = response.page.into_parts();
        let links = PageLinks::build(request_url, &meta);
        Self {
            filter: response.filter,
            applied_tag_ids: response.applied_tag_ids,
            entries,
            meta,
            links,
        }
    }
}

/// Encode a listing request as query parameters on `base`.
///
/// Existing query parameters on `base` are replaced.
///
/// # Examples
/// ```
/// use game_catalogue::domain::TagId;
/// use game_catalogue::domain::ports::ListEntriesRequest;
/// use game_catalogue::listing::listing_url;
/// use url::Url;
///
/// let base = Url::parse("https://games.example/catalogue").expect("url");
/// let request = ListEntriesRequest {
///     search: Some("jeu".to_owned()),
///     tag_ids: vec![TagId::new(1), TagId::new(4)],
///     page: Some(2),
/// };
/// assert_eq!(
///     listing_url(&base, &request).as_str(),
///     "https://games.example/catalogue?search=jeu&tag=1&tag=4&page=2"
/// );
/// ```
pub fn listing_url(base: &Url, request: &ListEntriesRequest) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    {
        let mut pairs = url.query_pairs_mut();
        let search = request.search.as_deref().map(str::trim);
        if let Some(search) = search.filter(|text| !text.is_empty()) {
            pairs.append_pair(SEARCH_QUERY_PARAM, search);
        }
        for tag_id in &request.tag_ids {
            pairs.append_pair(TAG_QUERY_PARAM, &tag_id.to_string());
        }
        pairs.append_pair(PAGE_QUERY_PARAM, &request.page.unwrap_or(1).to_string());
    }
    url
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pagination::{PageRequest, paginate};
    use rstest::rstest;

    use super::*;
    use crate::domain::{CatalogueEntryDraft, EntryId};

    fn entries(count: u64) -> Vec<CatalogueEntry> {
        (0..count)
            .map(|index| {
                CatalogueEntry::new(CatalogueEntryDraft {
                    id: EntryId::new(index + 1),
                    slug: None,
                    title: format!("Jeu vidéo {index}"),
                    description: String::new(),
                    release_date: NaiveDate::from_ymd_opt(2020, 2, 2).expect("valid date"),
                    tag_ids: Vec::new(),
                    reviews: Vec::new(),
                })
                .expect("valid entry")
            })
            .collect()
    }

    #[rstest]
    fn blank_search_is_omitted_from_url() {
        let base = Url::parse("https://games.example/catalogue?stale=1").expect("url");
        let request = ListEntriesRequest {
            search: Some("   ".to_owned()),
            ..ListEntriesRequest::default()
        };
        assert_eq!(
            listing_url(&base, &request).as_str(),
            "https://games.example/catalogue?page=1"
        );
    }

    #[rstest]
    fn listing_links_keep_filters() {
        let base = Url::parse("https://games.example/catalogue").expect("url");
        let request = ListEntriesRequest {
            search: Some("jeu".to_owned()),
            tag_ids: vec![TagId::new(2)],
            page: Some(2),
        };
        let response = ListEntriesResponse {
            filter: CatalogueFilter::new("jeu", [TagId::new(2)]),
            applied_tag_ids: vec![TagId::new(2)],
            page: paginate(entries(30), PageRequest::new(2, 10).expect("valid")),
        };

        let listing = CatalogueListing::new(response, &listing_url(&base, &request));

        assert_eq!(listing.entries.len(), 10);
        assert_eq!(listing.meta.total_pages(), 3);
        let next = listing.links.next.expect("next link");
        assert_eq!(
            next.as_str(),
            "https://games.example/catalogue?search=jeu&tag=2&page=3"
        );
    }

    #[rstest]
    fn listing_serialises_entries_meta_and_links() {
        let base = Url::parse("https://games.example/catalogue").expect("url");
        let response = ListEntriesResponse {
            filter: CatalogueFilter::default(),
            applied_tag_ids: Vec::new(),
            page: paginate(entries(3), PageRequest::default()),
        };

        let listing = CatalogueListing::new(
            response,
            &listing_url(&base, &ListEntriesRequest::default()),
        );
        let value = serde_json::to_value(&listing).expect("serialise listing");

        assert_eq!(value["entries"].as_array().map(Vec::len), Some(3));
        assert!(value.get("meta").is_some());
        assert!(value["links"].get("first").is_some());
    }
}
