//! Page envelope and the slicing routine.

use serde::Serialize;

use crate::request::PageRequest;

/// Navigation metadata describing one page of a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    page: usize,
    page_size: usize,
    total_items: usize,
    total_pages: usize,
}

impl PageMeta {
    /// Build metadata for `request` over a result set of `total_items`.
    #[must_use]
    pub const fn new(request: PageRequest, total_items: usize) -> Self {
        Self {
            page: request.number(),
            page_size: request.size(),
            total_items,
            total_pages: total_items.div_ceil(request.size()),
        }
    }

    /// The requested 1-indexed page number.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Items per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total number of matches across every page.
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// `ceil(total_items / page_size)`; zero when nothing matched.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Whether a page precedes this one within the result set.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1 && self.total_pages > 0
    }

    /// Whether a page follows this one within the result set.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether the requested page lies past the last page.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        self.page > self.total_pages
    }
}

/// A single page of items plus its navigation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    items: Vec<T>,
    meta: PageMeta,
}

impl<T> Page<T> {
    /// Items on this page, in result-set order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Navigation metadata.
    #[must_use]
    pub const fn meta(&self) -> &PageMeta {
        &self.meta
    }

    /// Number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the page, returning its items and metadata.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, PageMeta) {
        (self.items, self.meta)
    }

    /// Transform every item while keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

/// Slice an ordered result set into the requested page.
///
/// The input order is preserved, so callers must supply a deterministic
/// ordering for pages to be reproducible. Requesting a page past the last
/// one yields an empty page with accurate totals rather than an error.
///
/// # Example
///
/// ```
/// use pagination::{PageRequest, paginate};
///
/// let items: Vec<u32> = (0..50).collect();
///
/// let last = paginate(items.clone(), PageRequest::new(5, 10).expect("valid"));
/// assert_eq!(last.len(), 10);
///
/// let beyond = paginate(items, PageRequest::new(6, 10).expect("valid"));
/// assert!(beyond.is_empty());
/// assert_eq!(beyond.meta().total_pages(), 5);
/// ```
pub fn paginate<T, I>(ordered: I, request: PageRequest) -> Page<T>
where
    I: IntoIterator<Item = T>,
    I::IntoIter: ExactSizeIterator,
{
    let iter = ordered.into_iter();
    let meta = PageMeta::new(request, iter.len());
    let items = match request.offset() {
        Some(offset) => iter.skip(offset).take(request.size()).collect(),
        None => Vec::new(),
    };
    Page { items, meta }
}
