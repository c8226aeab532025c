//! Video game catalogue core.
//!
//! Layers follow the hexagonal split used throughout the crate:
//! - [`domain`] owns entities, rating aggregation, filtering, ports, and the
//!   services that implement the driving ports.
//! - [`outbound`] holds adapters for the driven ports.
//! - [`example_data`] wires deterministic fixture seeding at startup.
//! - [`listing`] assembles the JSON page document with navigation links.
//! - [`settings`] loads layered configuration through OrthoConfig.

pub mod domain;
pub mod example_data;
pub mod listing;
pub mod outbound;
pub mod settings;
