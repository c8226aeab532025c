//! Seed registry types and JSON parsing.
//!
//! This module defines the seed registry structure that holds named seed
//! definitions and the tag vocabulary that generated games draw from. The
//! registry is loaded from JSON and provides deterministic seed lookups.

use std::collections::HashSet;

use camino::Utf8Path;
use cap_std::fs::Dir;
use serde::{Deserialize, Serialize};

use crate::atomic_io::write_atomic;
use crate::error::RegistryError;

/// Current supported registry version.
const SUPPORTED_VERSION: u32 = 1;

/// A seed registry containing named seeds and the tag vocabulary.
///
/// # Example
///
/// ```
/// use example_data::SeedRegistry;
///
/// let json = r#"{
///     "version": 1,
///     "tagNames": ["RPG", "Action"],
///     "seeds": [{"name": "test", "seed": 42, "gameCount": 5, "userCount": 5}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid registry");
/// assert_eq!(registry.seeds().len(), 1);
/// assert_eq!(registry.tag_names(), ["RPG", "Action"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRegistry {
    version: u32,
    tag_names: Vec<String>,
    seeds: Vec<SeedDefinition>,
}

impl SeedRegistry {
    /// Parses a seed registry from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if:
    /// - The JSON is malformed or required fields are missing
    /// - The version is unsupported
    /// - The tag vocabulary is empty, blank, or repeats a name
    /// - The seeds array is empty or repeats a name
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawSeedRegistry =
            serde_json::from_str(json).map_err(|e| RegistryError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a seed registry from a JSON file within `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the file cannot be read or parsed.
    pub fn from_file(dir: &Dir, path: &Utf8Path) -> Result<Self, RegistryError> {
        let contents = dir
            .read_to_string(path)
            .map_err(|e| RegistryError::IoError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawSeedRegistry) -> Result<Self, RegistryError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        let tag_names = validate_tag_names(raw.tag_names)?;

        if raw.seeds.is_empty() {
            return Err(RegistryError::EmptySeeds);
        }

        let mut seen = HashSet::new();
        let mut seeds = Vec::with_capacity(raw.seeds.len());
        for s in raw.seeds {
            if !seen.insert(s.name.clone()) {
                return Err(RegistryError::DuplicateSeedName { name: s.name });
            }
            seeds.push(SeedDefinition::new(s.name, s.seed, s.game_count, s.user_count));
        }

        Ok(Self {
            version: raw.version,
            tag_names,
            seeds,
        })
    }

    /// Returns the registry version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the tag names, in the order their identifiers are assigned.
    #[must_use]
    pub fn tag_names(&self) -> &[String] {
        &self.tag_names
    }

    /// Returns all seed definitions.
    #[must_use]
    pub fn seeds(&self) -> &[SeedDefinition] {
        &self.seeds
    }

    /// Finds a seed definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SeedNotFound`] if no seed with the given name
    /// exists.
    pub fn find_seed(&self, name: &str) -> Result<&SeedDefinition, RegistryError> {
        self.seeds
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| RegistryError::SeedNotFound {
                name: name.to_owned(),
            })
    }

    /// Returns a copy of the registry with `seed` appended.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateSeedName`] when a seed with the same
    /// name is already registered.
    pub fn append_seed(&self, seed: SeedDefinition) -> Result<Self, RegistryError> {
        if self.seeds.iter().any(|existing| existing.name == seed.name) {
            return Err(RegistryError::DuplicateSeedName { name: seed.name });
        }
        let mut updated = self.clone();
        updated.seeds.push(seed);
        Ok(updated)
    }

    /// Renders the registry as pretty-printed JSON with a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SerializeError`] if serialisation fails.
    pub fn to_json_pretty(&self) -> Result<String, RegistryError> {
        let raw = RawSeedRegistry {
            version: self.version,
            tag_names: self.tag_names.clone(),
            seeds: self
                .seeds
                .iter()
                .map(|s| RawSeedDefinition {
                    name: s.name.clone(),
                    seed: s.seed,
                    game_count: s.game_count,
                    user_count: s.user_count,
                })
                .collect(),
        };
        let mut json =
            serde_json::to_string_pretty(&raw).map_err(|e| RegistryError::SerializeError {
                message: e.to_string(),
            })?;
        json.push('\n');
        Ok(json)
    }

    /// Atomically writes the registry to `path` within `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when serialisation or the write fails.
    pub fn write_to_file(&self, dir: &Dir, path: &Utf8Path) -> Result<(), RegistryError> {
        let json = self.to_json_pretty()?;
        write_atomic(dir, path, &json)
    }
}

fn validate_tag_names(names: Vec<String>) -> Result<Vec<String>, RegistryError> {
    if names.is_empty() {
        return Err(RegistryError::EmptyTagNames);
    }
    let mut seen = HashSet::new();
    for (index, name) in names.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(RegistryError::BlankTagName { index });
        }
        if !seen.insert(name.trim().to_lowercase()) {
            return Err(RegistryError::DuplicateTagName { name: name.clone() });
        }
    }
    Ok(names)
}

/// A named seed definition for deterministic catalogue generation.
///
/// Each seed has a unique name, an RNG seed value, and the number of games
/// and reviewers to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDefinition {
    name: String,
    seed: u64,
    game_count: usize,
    user_count: usize,
}

impl SeedDefinition {
    /// Creates a seed definition.
    ///
    /// # Example
    ///
    /// ```
    /// use example_data::SeedDefinition;
    ///
    /// let seed = SeedDefinition::new("mossy-owl".to_owned(), 2026, 50, 12);
    /// assert_eq!(seed.game_count(), 50);
    /// ```
    #[must_use]
    pub const fn new(name: String, seed: u64, game_count: usize, user_count: usize) -> Self {
        Self {
            name,
            seed,
            game_count,
            user_count,
        }
    }

    /// Returns the seed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the RNG seed value.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of games to generate.
    #[must_use]
    pub const fn game_count(&self) -> usize {
        self.game_count
    }

    /// Returns the number of reviewers to generate.
    #[must_use]
    pub const fn user_count(&self) -> usize {
        self.user_count
    }
}

/// Raw JSON representation for (de)serialisation.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedRegistry {
    version: u32,
    tag_names: Vec<String>,
    seeds: Vec<RawSeedDefinition>,
}

/// Raw JSON representation of a seed definition.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedDefinition {
    name: String,
    seed: u64,
    game_count: usize,
    user_count: usize,
}
