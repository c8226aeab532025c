//! Generated catalogue seed types.
//!
//! This module defines the output of catalogue generation. These types are
//! independent of backend domain types to avoid circular dependencies; the
//! backend validates them when converting to its own entities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A generated tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleTagSeed {
    /// Identifier, assigned from 1 in registry order.
    pub id: u64,
    /// Human-readable tag name.
    pub name: String,
}

/// A generated reviewer.
///
/// # Example
///
/// ```
/// use example_data::ExampleUserSeed;
///
/// let user = ExampleUserSeed {
///     id: 1,
///     display_name: "Ada Lovelace".to_owned(),
/// };
///
/// assert_eq!(user.display_name, "Ada Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleUserSeed {
    /// Identifier, assigned from 1.
    pub id: u64,
    /// Human-readable display name.
    pub display_name: String,
}

/// A generated review left by one of the generated users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleReviewSeed {
    /// Identifier of the reviewing user.
    pub user_id: u64,
    /// Star rating between 1 and 5.
    pub rating: u8,
    /// Optional free-text comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A generated game together with its reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleGameSeed {
    /// Identifier, assigned from 1.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Lorem description.
    pub description: String,
    /// Release date.
    pub release_date: NaiveDate,
    /// Identifiers of the tags attached to the game, ascending.
    pub tag_ids: Vec<u64>,
    /// Reviews, each from a distinct user.
    pub reviews: Vec<ExampleReviewSeed>,
}

/// The complete generated catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleCatalogueSeed {
    /// Tag vocabulary.
    pub tags: Vec<ExampleTagSeed>,
    /// Reviewers.
    pub users: Vec<ExampleUserSeed>,
    /// Games, ordered by identifier.
    pub games: Vec<ExampleGameSeed>,
}

impl ExampleCatalogueSeed {
    /// Total number of reviews across every game.
    #[must_use]
    pub fn review_count(&self) -> usize {
        self.games.iter().map(|game| game.reviews.len()).sum()
    }
}
