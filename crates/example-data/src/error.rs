//! Error types for the example-data crate.
//!
//! Registry parsing and catalogue generation each get a semantic error enum
//! built with `thiserror`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when parsing, querying, or writing a seed registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry file could not be read.
    #[error("failed to read registry file at '{path}': {message}")]
    IoError {
        /// Path to the registry file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The registry file could not be written.
    #[error("failed to write registry file at '{path}': {message}")]
    WriteError {
        /// Path to the registry file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry could not be rendered back to JSON.
    #[error("failed to serialise registry: {message}")]
    SerializeError {
        /// Description of the serialisation error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// The registry declares no tag names.
    #[error("registry contains no tag names")]
    EmptyTagNames,

    /// A tag name is blank once trimmed.
    #[error("tag name at index {index} must not be blank")]
    BlankTagName {
        /// Index of the blank name in the array.
        index: usize,
    },

    /// Tag names must be unique across the registry.
    #[error("duplicate tag name '{name}' in registry")]
    DuplicateTagName {
        /// The repeated tag name.
        name: String,
    },

    /// The registry contains no seed definitions.
    #[error("registry contains no seed definitions")]
    EmptySeeds,

    /// The requested seed name was not found in the registry.
    #[error("seed '{name}' not found in registry")]
    SeedNotFound {
        /// The seed name that was not found.
        name: String,
    },

    /// A seed with the same name already exists.
    #[error("seed '{name}' already exists in registry")]
    DuplicateSeedName {
        /// The repeated seed name.
        name: String,
    },
}

/// Errors that can occur during catalogue generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Failed to generate a valid display name after maximum retries.
    #[error("failed to generate valid display name after {max_attempts} attempts")]
    DisplayNameGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },

    /// Games need reviewers, so a seed with games must also declare users.
    #[error("seed declares {game_count} games but no users to review them")]
    NoReviewers {
        /// Number of games requested by the seed.
        game_count: usize,
    },

    /// The generated identifier space overflowed.
    #[error("{kind} count {count} exceeds the identifier range")]
    IdentifierOverflow {
        /// Kind of record being numbered.
        kind: &'static str,
        /// Requested record count.
        count: usize,
    },
}
