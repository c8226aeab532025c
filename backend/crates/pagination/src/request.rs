//! Validated page requests.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of items per page when the caller does not configure one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Largest page size accepted by [`PageRequest::new`].
pub const MAX_PAGE_SIZE: usize = 100;

/// Errors raised when a page request is out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// Page numbers are 1-indexed.
    #[error("page number must be at least 1")]
    ZeroPageNumber,
    /// A page must hold at least one item.
    #[error("page size must be at least 1")]
    ZeroPageSize,
    /// The page size exceeds [`MAX_PAGE_SIZE`].
    #[error("page size must be at most {max} (got {size})")]
    PageSizeTooLarge {
        /// Largest accepted page size.
        max: usize,
        /// Requested page size.
        size: usize,
    },
}

/// A 1-indexed page number paired with a positive page size.
///
/// Deserialisation runs the same validation as [`PageRequest::new`], so a
/// request decoded from a query string is always usable.
///
/// # Example
///
/// ```
/// use pagination::{PageRequest, PageRequestError};
///
/// let request = PageRequest::new(3, 10).expect("valid request");
/// assert_eq!(request.offset(), Some(20));
///
/// assert_eq!(PageRequest::new(0, 10), Err(PageRequestError::ZeroPageNumber));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PageRequestDraft", rename_all = "camelCase")]
pub struct PageRequest {
    number: usize,
    size: usize,
}

impl PageRequest {
    /// Validate and construct a page request.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError`] when the page number is zero or the page
    /// size is zero or above [`MAX_PAGE_SIZE`].
    pub const fn new(number: usize, size: usize) -> Result<Self, PageRequestError> {
        if number == 0 {
            return Err(PageRequestError::ZeroPageNumber);
        }
        if size == 0 {
            return Err(PageRequestError::ZeroPageSize);
        }
        if size > MAX_PAGE_SIZE {
            return Err(PageRequestError::PageSizeTooLarge {
                max: MAX_PAGE_SIZE,
                size,
            });
        }
        Ok(Self { number, size })
    }

    /// First page with the given size.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError`] when the size is out of bounds.
    pub const fn first(size: usize) -> Result<Self, PageRequestError> {
        Self::new(1, size)
    }

    /// Returns the 1-indexed page number.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Returns the page size.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of items preceding this page, or `None` when the offset does
    /// not fit in `usize`.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        // `number` is at least 1, so the subtraction cannot underflow.
        (self.number - 1).checked_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            number: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageRequestDraft {
    #[serde(default = "first_page")]
    number: usize,
    #[serde(default = "default_page_size")]
    size: usize,
}

const fn first_page() -> usize {
    1
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl TryFrom<PageRequestDraft> for PageRequest {
    type Error = PageRequestError;

    fn try_from(draft: PageRequestDraft) -> Result<Self, Self::Error> {
        Self::new(draft.number, draft.size)
    }
}
