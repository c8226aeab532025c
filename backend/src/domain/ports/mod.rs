//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports ([`CatalogueRepository`], [`CatalogueIngestionRepository`])
//! are implemented by outbound adapters. Driving ports ([`CatalogueQuery`],
//! [`ReviewCommand`], [`ReviewQuery`]) are implemented by domain services
//! and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod catalogue_ingestion_repository;
mod catalogue_query;
mod catalogue_repository;
mod review_command;
mod review_query;

#[cfg(test)]
pub use catalogue_ingestion_repository::MockCatalogueIngestionRepository;
pub use catalogue_ingestion_repository::{
    CatalogueIngestionRepository, CatalogueIngestionRepositoryError,
};
#[cfg(test)]
pub use catalogue_query::MockCatalogueQuery;
pub use catalogue_query::{CatalogueQuery, ListEntriesRequest, ListEntriesResponse};
#[cfg(test)]
pub use catalogue_repository::MockCatalogueRepository;
pub use catalogue_repository::{CatalogueRepository, CatalogueRepositoryError, CatalogueSnapshot};
#[cfg(test)]
pub use review_command::MockReviewCommand;
pub use review_command::{ReviewCommand, SubmitReviewRequest, SubmitReviewResponse};
#[cfg(test)]
pub use review_query::MockReviewQuery;
pub use review_query::ReviewQuery;
