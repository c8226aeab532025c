//! Derived rating fields on catalogue entries.

use super::{Rating, RatingHistogram};
use crate::domain::catalogue::CatalogueEntry;

/// Mean of `ratings` rounded half-up to the nearest whole star.
///
/// Returns `None` when `ratings` is empty. The mean of in-range ratings is
/// itself in range, so a non-empty input always yields a rating.
///
/// # Examples
/// ```
/// use game_catalogue::domain::{Rating, rounded_average};
///
/// assert_eq!(rounded_average([Rating::Three, Rating::Five, Rating::Four]), Some(Rating::Four));
/// assert_eq!(rounded_average([Rating::One, Rating::Two, Rating::Three, Rating::Four]), Some(Rating::Three));
/// assert_eq!(rounded_average([]), None);
/// ```
pub fn rounded_average(ratings: impl IntoIterator<Item = Rating>) -> Option<Rating> {
    let (sum, count) = ratings
        .into_iter()
        .fold((0_u64, 0_u64), |(sum, count), rating| {
            (
                sum.saturating_add(u64::from(rating.value())),
                count.saturating_add(1),
            )
        });
    if count == 0 {
        return None;
    }
    // floor(sum / count + 1/2) in integer arithmetic.
    let rounded = sum
        .saturating_mul(2)
        .saturating_add(count)
        .checked_div(count.saturating_mul(2))?;
    Rating::ALL
        .into_iter()
        .find(|rating| u64::from(rating.value()) == rounded)
}

/// Recomputes the derived rating fields of a [`CatalogueEntry`] from its
/// reviews.
///
/// Both operations rebuild from scratch, so calling them repeatedly is
/// idempotent.
#[derive(Debug, Clone, Copy, Default)]
pub struct RatingAggregator;

impl RatingAggregator {
    /// Set the entry's average rating from its reviews.
    ///
    /// An entry without reviews has no average.
    pub fn calculate_average(entry: &mut CatalogueEntry) {
        let average = rounded_average(entry.reviews().iter().map(|review| review.rating()));
        entry.set_average_rating(average);
    }

    /// Reset and refill the entry's histogram from its reviews.
    pub fn count_ratings_per_value(entry: &mut CatalogueEntry) {
        let histogram =
            RatingHistogram::from_ratings(entry.reviews().iter().map(|review| review.rating()));
        entry.set_histogram(histogram);
        debug_assert_eq!(entry.histogram().total(), entry.reviews().len());
    }

    /// Run both recomputations.
    pub fn recompute(entry: &mut CatalogueEntry) {
        Self::calculate_average(entry);
        Self::count_ratings_per_value(entry);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::catalogue::{
        CatalogueEntryDraft, EntryId, Review, ReviewDraft, ReviewId, UserId,
    };

    fn ratings(values: &[u8]) -> Vec<Rating> {
        values
            .iter()
            .map(|value| Rating::try_from(*value).expect("in range"))
            .collect()
    }

    fn review(id: u64, rating: u8) -> Review {
        Review::new(ReviewDraft {
            id: ReviewId::new(id),
            entry_id: EntryId::new(1),
            user_id: UserId::new(id),
            rating: Rating::try_from(rating).expect("in range"),
            comment: None,
        })
        .expect("valid review")
    }

    #[fixture]
    fn entry() -> CatalogueEntry {
        CatalogueEntry::new(CatalogueEntryDraft {
            id: EntryId::new(1),
            slug: None,
            title: "Jeu vidéo 1".to_owned(),
            description: String::new(),
            release_date: NaiveDate::from_ymd_opt(2001, 5, 4).expect("valid date"),
            tag_ids: Vec::new(),
            reviews: Vec::new(),
        })
        .expect("valid entry")
    }

    #[rstest]
    #[case(&[3, 5, 4], Some(Rating::Four))]
    #[case(&[1, 2, 3, 4], Some(Rating::Three))]
    #[case(&[1, 2], Some(Rating::Two))]
    #[case(&[5], Some(Rating::Five))]
    #[case(&[1, 1, 2], Some(Rating::One))]
    #[case(&[], None)]
    fn rounds_half_up(#[case] values: &[u8], #[case] expected: Option<Rating>) {
        assert_eq!(rounded_average(ratings(values)), expected);
    }

    #[rstest]
    fn entry_without_reviews_has_no_average(mut entry: CatalogueEntry) {
        RatingAggregator::recompute(&mut entry);
        assert_eq!(entry.average_rating(), None);
        assert_eq!(entry.histogram().total(), 0);
    }

    #[rstest]
    fn recompute_reflects_reviews(mut entry: CatalogueEntry) {
        for (id, rating) in [1_u8, 1, 3, 5, 5, 5, 2].into_iter().enumerate() {
            let id = u64::try_from(id).expect("small index") + 1;
            entry.add_review(review(id, rating)).expect("distinct users");
        }
        entry.set_average_rating(None);
        entry.set_histogram(RatingHistogram::default());

        RatingAggregator::recompute(&mut entry);

        let counts: Vec<usize> = entry.histogram().iter().map(|(_, count)| count).collect();
        assert_eq!(counts, vec![2, 1, 1, 0, 3]);
        // 22 / 7 = 3.14 rounds to 3
        assert_eq!(entry.average_rating(), Some(Rating::Three));
    }

    #[rstest]
    fn recompute_is_idempotent(mut entry: CatalogueEntry) {
        entry.add_review(review(1, 4)).expect("first review");
        RatingAggregator::recompute(&mut entry);
        let once = entry.clone();
        RatingAggregator::recompute(&mut entry);
        assert_eq!(entry, once);
    }

    #[rstest]
    fn histogram_is_rebuilt_rather_than_accumulated(mut entry: CatalogueEntry) {
        entry.add_review(review(1, 2)).expect("first review");
        RatingAggregator::count_ratings_per_value(&mut entry);
        RatingAggregator::count_ratings_per_value(&mut entry);
        RatingAggregator::count_ratings_per_value(&mut entry);
        assert_eq!(entry.histogram().count_for(Rating::Two), 1);
    }
}
