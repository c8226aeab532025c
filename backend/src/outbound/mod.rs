//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local catalogue store backing the read, write and
//!   ingestion ports.
//!
//! Adapters are thin translators between domain types and their storage
//! representation. They contain no business logic.

pub mod memory;

pub use memory::InMemoryCatalogueRepository;
