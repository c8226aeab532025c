//! Page-number pagination primitives shared by catalogue endpoints.
//!
//! The crate is independent of catalogue domain types. Callers hand over an
//! already filtered and ordered candidate list; [`paginate`] slices it into
//! the requested page and reports the metadata a presentation layer needs to
//! render page navigation.
//!
//! # Example
//!
//! ```
//! use pagination::{PageRequest, paginate};
//!
//! let items: Vec<u32> = (0..50).collect();
//! let request = PageRequest::new(2, 10).expect("valid request");
//! let page = paginate(items, request);
//!
//! assert_eq!(page.items().first(), Some(&10));
//! assert_eq!(page.meta().total_pages(), 5);
//! ```

mod links;
mod page;
mod request;

pub use links::{PAGE_QUERY_PARAM, PageLinks};
pub use page::{Page, PageMeta, paginate};
pub use request::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest, PageRequestError};
