//! Star ratings and their per-value histogram.
//!
//! A [`Rating`] is a closed five-valued type, so any value that reaches a
//! [`RatingHistogram`] is already known to be in range.

use std::fmt;

use serde::{Deserialize, Serialize};

mod aggregator;

pub use aggregator::{RatingAggregator, rounded_average};

/// Whole-star rating between one and five inclusive.
///
/// # Examples
/// ```
/// use game_catalogue::domain::Rating;
///
/// let rating = Rating::try_from(4_i64).expect("in range");
/// assert_eq!(rating, Rating::Four);
/// assert!(Rating::try_from(6_i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum Rating {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl Rating {
    /// Every rating, lowest first.
    pub const ALL: [Self; 5] = [Self::One, Self::Two, Self::Three, Self::Four, Self::Five];

    /// Numeric star value.
    pub const fn value(self) -> u8 {
        self as u8
    }
}

/// Raised when a raw value is outside `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("rating must be between 1 and 5 (got {value})")]
pub struct RatingOutOfRange {
    /// The rejected value.
    pub value: i64,
}

impl TryFrom<i64> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            _ => Err(RatingOutOfRange { value }),
        }
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.value()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Count of reviews at each of the five rating values.
///
/// Serialises as an object keyed by the star value:
/// `{"1": 2, "2": 1, "3": 1, "4": 0, "5": 3}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingHistogram {
    #[serde(rename = "1")]
    one: usize,
    #[serde(rename = "2")]
    two: usize,
    #[serde(rename = "3")]
    three: usize,
    #[serde(rename = "4")]
    four: usize,
    #[serde(rename = "5")]
    five: usize,
}

impl RatingHistogram {
    /// Build a histogram by counting `ratings`.
    ///
    /// # Examples
    /// ```
    /// use game_catalogue::domain::{Rating, RatingHistogram};
    ///
    /// let histogram = RatingHistogram::from_ratings([Rating::Five, Rating::One, Rating::Five]);
    /// assert_eq!(histogram.count_for(Rating::Five), 2);
    /// assert_eq!(histogram.total(), 3);
    /// ```
    pub fn from_ratings(ratings: impl IntoIterator<Item = Rating>) -> Self {
        let mut histogram = Self::default();
        for rating in ratings {
            histogram.increment(rating);
        }
        histogram
    }

    /// Add one review at `rating`.
    pub fn increment(&mut self, rating: Rating) {
        let bucket = self.bucket_mut(rating);
        *bucket = bucket.saturating_add(1);
    }

    /// Number of reviews at `rating`.
    pub fn count_for(&self, rating: Rating) -> usize {
        match rating {
            Rating::One => self.one,
            Rating::Two => self.two,
            Rating::Three => self.three,
            Rating::Four => self.four,
            Rating::Five => self.five,
        }
    }

    /// Sum of every bucket.
    pub fn total(&self) -> usize {
        Rating::ALL.iter().map(|rating| self.count_for(*rating)).sum()
    }

    /// Zero every bucket.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// `(rating, count)` pairs, lowest rating first.
    pub fn iter(&self) -> impl Iterator<Item = (Rating, usize)> + '_ {
        Rating::ALL
            .into_iter()
            .map(|rating| (rating, self.count_for(rating)))
    }

    fn bucket_mut(&mut self, rating: Rating) -> &mut usize {
        match rating {
            Rating::One => &mut self.one,
            Rating::Two => &mut self.two,
            Rating::Three => &mut self.three,
            Rating::Four => &mut self.four,
            Rating::Five => &mut self.five,
        }
    }
}
