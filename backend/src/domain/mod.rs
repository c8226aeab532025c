//! Domain primitives, aggregates and services.
//!
//! Purpose: define the catalogue model (entries, reviews, tags), the rating
//! aggregates derived from reviews, the catalogue filter, and the services
//! implementing the driving ports. Persistence stays behind [`ports`].
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic failure payload.
//! - CatalogueEntry, Review, Tag: validated catalogue records.
//! - Rating, RatingHistogram, RatingAggregator: review aggregates.
//! - CatalogueFilter: search and tag matching.
//! - CatalogueQueryService, ReviewService: driving port implementations.

pub mod catalogue;
pub mod catalogue_filter;
pub mod catalogue_query_service;
pub mod error;
pub mod example_data;
pub mod ports;
pub mod rating;
pub mod review_service;
mod slug;

pub use self::catalogue::{
    CatalogueEntry, CatalogueEntryDraft, CatalogueValidationError, EntryId, MAX_COMMENT_CHARS,
    Review, ReviewDraft, ReviewId, Tag, TagDraft, TagId, UserId,
};
pub use self::catalogue_filter::{CatalogueFilter, FilteredEntries};
pub use self::catalogue_query_service::CatalogueQueryService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::example_data::{ExampleDataSeedOutcome, ExampleDataSeeder, ExampleDataSeedingError};
pub use self::rating::{Rating, RatingAggregator, RatingHistogram, RatingOutOfRange, rounded_average};
pub use self::review_service::ReviewService;
pub use self::slug::slugify;

/// Convenient domain result alias.
///
/// # Examples
/// ```
/// use game_catalogue::domain::{DomainResult, Error};
///
/// fn lookup() -> DomainResult<u32> {
///     Err(Error::not_found("nope"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;
