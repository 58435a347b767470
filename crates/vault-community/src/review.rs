// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-game review lists.
//!
//! Each game keeps its own newest-first list under `vault.reviews.<slug>`,
//! so one corrupt or oversized list never touches another game's reviews.
//! Ratings are whole stars in `1..=5`.

use tracing::info;
use vault_store::{keys, KeyValueStore};

use crate::record::{Review, POINTS_REVIEW};
use crate::{Community, CommunityError, MIN_BODY};

impl<S> Community<S>
where
    S: KeyValueStore,
{
    /// Submit a review for a game as the signed-in user. Awards
    /// [`POINTS_REVIEW`] points and bumps the author's review counter.
    pub fn submit_review(
        &mut self,
        game_slug: &str,
        rating: u8,
        body: &str,
        now_ms: i64,
    ) -> Result<Review, CommunityError> {
        let mut author = self.require_user()?;
        if !(1..=5).contains(&rating) {
            return Err(CommunityError::RatingOutOfRange);
        }
        let body = body.trim();
        if body.len() < MIN_BODY {
            return Err(CommunityError::BodyTooShort);
        }
        let key = keys::reviews(game_slug);
        let mut reviews: Vec<Review> = self.list_or_empty(&key);
        let review = Review {
            id: format!("review-{now_ms}-{}", reviews.len()),
            game_slug: game_slug.to_owned(),
            author: author.username.clone(),
            rating,
            body: body.to_owned(),
            created_at_ms: now_ms,
        };
        reviews.insert(0, review.clone());
        self.records_mut().save(&key, &reviews)?;
        author.reviews_count += 1;
        author.points += POINTS_REVIEW;
        self.patch_user(&author)?;
        info!(author = %review.author, game = game_slug, rating, "review submitted");
        Ok(review)
    }

    /// Reviews for one game, newest first.
    pub fn reviews(&self, game_slug: &str) -> Vec<Review> {
        self.list_or_empty(&keys::reviews(game_slug))
    }

    /// Mean rating across a game's stored reviews, `None` when there are
    /// none.
    pub fn average_rating(&self, game_slug: &str) -> Option<f64> {
        let reviews = self.reviews(game_slug);
        let count = u32::try_from(reviews.len()).unwrap_or(u32::MAX);
        if count == 0 {
            return None;
        }
        let sum: u32 = reviews
            .iter()
            .map(|review| u32::from(review.rating))
            .sum();
        Some(f64::from(sum) / f64::from(count))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use vault_store::MemoryStore;

    use super::*;

    fn signed_in() -> Community<MemoryStore> {
        let mut hub = Community::new(MemoryStore::new());
        hub.register("frostbyte", "", 0).unwrap();
        hub
    }

    // ── 1. reviewing requires a session ─────────────────────────────────
    #[test]
    fn review_requires_session() {
        let mut hub = Community::new(MemoryStore::new());
        assert!(matches!(
            hub.submit_review("dark-manor", 5, "Great puzzles throughout.", 1),
            Err(CommunityError::SignedOut)
        ));
    }

    // ── 2. ratings clamp to whole stars ─────────────────────────────────
    #[test]
    fn rating_bounds() {
        let mut hub = signed_in();
        for bad in [0_u8, 6, 200] {
            assert!(matches!(
                hub.submit_review("dark-manor", bad, "Great puzzles throughout.", 1),
                Err(CommunityError::RatingOutOfRange)
            ));
        }
        for good in 1..=5_u8 {
            hub.submit_review("dark-manor", good, "Great puzzles throughout.", i64::from(good))
                .unwrap();
        }
        assert_eq!(hub.reviews("dark-manor").len(), 5);
    }

    // ── 3. lists are per game and newest first ──────────────────────────
    #[test]
    fn per_game_isolation() {
        let mut hub = signed_in();
        hub.submit_review("dark-manor", 4, "Great puzzles throughout.", 10)
            .unwrap();
        hub.submit_review("logic-loft", 2, "Hints were too cryptic.", 20)
            .unwrap();
        hub.submit_review("dark-manor", 5, "Even better on replay.", 30)
            .unwrap();
        let manor = hub.reviews("dark-manor");
        assert_eq!(manor.len(), 2);
        assert_eq!(manor[0].rating, 5);
        assert_eq!(manor[1].rating, 4);
        assert_eq!(hub.reviews("logic-loft").len(), 1);
        assert!(hub.reviews("dice-tower").is_empty());
    }

    // ── 4. average over stored reviews only ─────────────────────────────
    #[test]
    fn average_rating_math() {
        let mut hub = signed_in();
        assert!(hub.average_rating("dark-manor").is_none());
        hub.submit_review("dark-manor", 5, "Great puzzles throughout.", 1)
            .unwrap();
        hub.submit_review("dark-manor", 2, "Hints were too cryptic.", 2)
            .unwrap();
        let mean = hub.average_rating("dark-manor").unwrap();
        assert!((mean - 3.5).abs() < 1e-9);
    }

    // ── 5. reviewing bumps points and counters ──────────────────────────
    #[test]
    fn reviewing_awards_points() {
        let mut hub = signed_in();
        let before = hub.current_user().unwrap();
        hub.submit_review("dark-manor", 4, "Great puzzles throughout.", 1)
            .unwrap();
        let after = hub.current_user().unwrap();
        assert_eq!(after.points, before.points + POINTS_REVIEW);
        assert_eq!(after.reviews_count, before.reviews_count + 1);
    }

    // ── 6. short bodies are rejected ────────────────────────────────────
    #[test]
    fn body_floor() {
        let mut hub = signed_in();
        assert!(matches!(
            hub.submit_review("dark-manor", 4, "meh", 1),
            Err(CommunityError::BodyTooShort)
        ));
        assert!(hub.reviews("dark-manor").is_empty());
    }

    // ── 7. corrupt review list degrades to empty ────────────────────────
    #[test]
    fn corrupt_review_list() {
        let mut hub = signed_in();
        hub.store_mut()
            .set(&keys::reviews("dark-manor"), "[not json");
        assert!(hub.reviews("dark-manor").is_empty());
        assert!(hub.average_rating("dark-manor").is_none());
    }
}
