//! Navigation links for paginated listings.

use serde::Serialize;
use url::Url;

use crate::page::PageMeta;

/// Query parameter carrying the 1-indexed page number.
pub const PAGE_QUERY_PARAM: &str = "page";

/// First, previous, next, and last page URLs for a listing.
///
/// Every link is derived from the request URL by rewriting only the
/// [`PAGE_QUERY_PARAM`] pair, so filter parameters survive navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLinks {
    /// Link to page 1, absent when there are no pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<Url>,
    /// Link to the preceding page, clamped to the last page when the
    /// current page is out of range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<Url>,
    /// Link to the following page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Url>,
    /// Link to the last page, absent when there are no pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<Url>,
}

impl PageLinks {
    /// Build navigation links for `meta` relative to `base`.
    ///
    /// # Example
    ///
    /// ```
    /// use pagination::{PageLinks, PageMeta, PageRequest};
    /// use url::Url;
    ///
    /// let base = Url::parse("https://games.example/?search=jeu&page=2").expect("url");
    /// let meta = PageMeta::new(PageRequest::new(2, 10).expect("valid"), 50);
    /// let links = PageLinks::build(&base, &meta);
    ///
    /// let next = links.next.expect("next link");
    /// assert_eq!(next.as_str(), "https://games.example/?search=jeu&page=3");
    /// ```
    #[must_use]
    pub fn build(base: &Url, meta: &PageMeta) -> Self {
        let total_pages = meta.total_pages();
        if total_pages == 0 {
            return Self {
                first: None,
                prev: None,
                next: None,
                last: None,
            };
        }

        let current = meta.page();
        let prev = meta
            .has_previous()
            .then(|| with_page(base, current.saturating_sub(1).min(total_pages)));
        let next = meta.has_next().then(|| with_page(base, current.saturating_add(1)));

        Self {
            first: Some(with_page(base, 1)),
            prev,
            next,
            last: Some(with_page(base, total_pages)),
        }
    }
}

fn with_page(base: &Url, page: usize) -> Url {
    let retained: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| key != PAGE_QUERY_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut url = base.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        pairs.extend_pairs(retained);
        pairs.append_pair(PAGE_QUERY_PARAM, &page.to_string());
    }
    url
}
