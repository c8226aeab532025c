//! Deterministic example catalogue generation for demonstration purposes.
//!
//! This crate generates a believable, reproducible video game catalogue
//! (tags, reviewers, games, and their reviews) from a JSON seed registry. It
//! is deliberately independent of the backend domain types; the backend
//! converts the seed records into validated entities at the point of use.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading seed registries from JSON files
//! - Deterministic catalogue generation using named seeds
//! - Display name validation for generated reviewers
//! - Appending named seeds to a registry file via the `example-data-seed`
//!   binary
//!
//! # Example
//!
//! ```
//! use example_data::{SeedRegistry, generate_example_catalogue};
//!
//! let json = r#"{
//!     "version": 1,
//!     "tagNames": ["RPG", "Action", "Puzzle"],
//!     "seeds": [{"name": "test-seed", "seed": 42, "gameCount": 5, "userCount": 6}]
//! }"#;
//!
//! let registry = SeedRegistry::from_json(json).expect("valid registry");
//! let seed_def = registry.find_seed("test-seed").expect("seed exists");
//! let catalogue = generate_example_catalogue(&registry, seed_def).expect("generation succeeds");
//!
//! assert_eq!(catalogue.games.len(), 5);
//! assert_eq!(catalogue.tags.len(), 3);
//! ```

mod atomic_io;
mod error;
mod generator;
mod registry;
mod seed;
pub mod registry_update;
mod validation;

pub use error::{GenerationError, RegistryError};
pub use generator::{
    MAX_REVIEWS_PER_GAME, MAX_TAGS_PER_GAME, MIN_REVIEWS_PER_GAME, MIN_TAGS_PER_GAME,
    generate_example_catalogue,
};
pub use registry::{SeedDefinition, SeedRegistry};
pub use seed::{
    ExampleCatalogueSeed, ExampleGameSeed, ExampleReviewSeed, ExampleTagSeed, ExampleUserSeed,
};
pub use validation::{DISPLAY_NAME_MAX, DISPLAY_NAME_MIN, is_valid_display_name};
