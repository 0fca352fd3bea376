//! Challenge completion, points and badge tiers.
//!
//! Completing a challenge is a ratchet: challenges never reopen and points
//! are never taken back.

use std::collections::BTreeMap;

use crate::models::Challenge;
use crate::notice::Notice;

/// Points the challenges page starts with, independent of which fixture
/// challenges are already marked completed.
pub const DEFAULT_SEED_POINTS: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BadgeTier {
    Starter,
    Bronze,
    Silver,
    Gold,
}

impl BadgeTier {
    const BRONZE_THRESHOLD: u32 = 150;
    const SILVER_THRESHOLD: u32 = 300;
    const GOLD_THRESHOLD: u32 = 500;

    pub const ALL: [BadgeTier; 4] = [
        BadgeTier::Starter,
        BadgeTier::Bronze,
        BadgeTier::Silver,
        BadgeTier::Gold,
    ];

    pub fn for_points(points: u32) -> Self {
        match points {
            p if p >= Self::GOLD_THRESHOLD => BadgeTier::Gold,
            p if p >= Self::SILVER_THRESHOLD => BadgeTier::Silver,
            p if p >= Self::BRONZE_THRESHOLD => BadgeTier::Bronze,
            _ => BadgeTier::Starter,
        }
    }

    /// Lowest point total that earns this tier.
    pub fn threshold(self) -> u32 {
        match self {
            BadgeTier::Starter => 0,
            BadgeTier::Bronze => Self::BRONZE_THRESHOLD,
            BadgeTier::Silver => Self::SILVER_THRESHOLD,
            BadgeTier::Gold => Self::GOLD_THRESHOLD,
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            BadgeTier::Starter => Some(BadgeTier::Bronze),
            BadgeTier::Bronze => Some(BadgeTier::Silver),
            BadgeTier::Silver => Some(BadgeTier::Gold),
            BadgeTier::Gold => None,
        }
    }

    /// Point band for the legend, e.g. `Starter: 0-149 pts`.
    pub fn band_label(self) -> String {
        let name = match self {
            BadgeTier::Starter => "Starter",
            BadgeTier::Bronze => "Bronze",
            BadgeTier::Silver => "Silver",
            BadgeTier::Gold => "Gold",
        };
        match self.next() {
            Some(next) => format!("{}: {}-{} pts", name, self.threshold(), next.threshold() - 1),
            None => format!("{}: {}+ pts", name, self.threshold()),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BadgeTier::Starter => "starter",
            BadgeTier::Bronze => "bronze",
            BadgeTier::Silver => "silver",
            BadgeTier::Gold => "gold",
        }
    }
}

pub struct ProgressionEngine {
    challenges: BTreeMap<u32, Challenge>,
    seed_points: u32,
    earned_points: u32,
}

impl ProgressionEngine {
    pub fn new(challenges: Vec<Challenge>, seed_points: u32) -> Self {
        Self {
            challenges: challenges.into_iter().map(|c| (c.id, c)).collect(),
            seed_points,
            earned_points: 0,
        }
    }

    /// Challenges in id order.
    pub fn challenges(&self) -> impl Iterator<Item = &Challenge> {
        self.challenges.values()
    }

    pub fn challenge(&self, id: u32) -> Option<&Challenge> {
        self.challenges.get(&id)
    }

    pub fn challenge_count(&self) -> usize {
        self.challenges.len()
    }

    pub fn completed_count(&self) -> usize {
        self.challenges.values().filter(|c| c.completed).count()
    }

    pub fn total_points(&self) -> u32 {
        self.seed_points.saturating_add(self.earned_points)
    }

    pub fn badge_tier(&self) -> BadgeTier {
        BadgeTier::for_points(self.total_points())
    }

    pub fn next_tier(&self) -> Option<BadgeTier> {
        self.badge_tier().next()
    }

    /// Zero once gold is reached.
    pub fn points_to_next_tier(&self) -> u32 {
        self.next_tier()
            .map_or(0, |tier| tier.threshold() - self.total_points())
    }

    /// Share of the current tier's band already covered, 1.0 at gold.
    pub fn tier_progress(&self) -> f64 {
        let tier = self.badge_tier();
        let Some(next) = tier.next() else {
            return 1.0;
        };
        let band = next.threshold() - tier.threshold();
        let covered = self.total_points() - tier.threshold();
        covered as f64 / band as f64
    }

    /// Marks a challenge completed and awards its points. Unknown or
    /// already completed challenges are left untouched.
    pub fn complete_challenge(&mut self, id: u32) -> Option<Notice> {
        let Some(challenge) = self.challenges.get_mut(&id) else {
            tracing::debug!(id, "unknown challenge");
            return None;
        };
        if challenge.completed {
            tracing::debug!(id, "challenge already completed");
            return None;
        }

        challenge.completed = true;
        self.earned_points = self.earned_points.saturating_add(challenge.points);

        tracing::info!(
            id,
            points = challenge.points,
            total = self.seed_points.saturating_add(self.earned_points),
            "challenge completed"
        );

        Some(Notice::ChallengeCompleted {
            title: challenge.title.clone(),
            points: challenge.points,
        })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::models::Difficulty;

    fn challenge(id: u32, points: u32, completed: bool) -> Challenge {
        Challenge {
            id,
            title: format!("Challenge {}", id),
            description: String::new(),
            points,
            difficulty: Difficulty::Medium,
            completed,
        }
    }

    fn engine() -> ProgressionEngine {
        ProgressionEngine::new(
            vec![
                challenge(1, 50, false),
                challenge(2, 75, false),
                challenge(3, 60, false),
            ],
            DEFAULT_SEED_POINTS,
        )
    }

    #[test]
    fn test_complete_challenge_moves_to_bronze() {
        let mut progression = engine();
        assert_eq!(progression.total_points(), 120);
        assert_eq!(progression.badge_tier(), BadgeTier::Starter);

        let notice = progression.complete_challenge(2);
        assert_eq!(
            notice,
            Some(Notice::ChallengeCompleted {
                title: "Challenge 2".to_string(),
                points: 75,
            })
        );
        assert_eq!(progression.total_points(), 195);
        assert_eq!(progression.badge_tier(), BadgeTier::Bronze);
        assert_eq!(progression.points_to_next_tier(), 105);
        assert_eq!(progression.completed_count(), 1);
    }

    #[test]
    fn test_complete_twice_awards_once() {
        let mut progression = engine();
        assert!(progression.complete_challenge(2).is_some());
        assert!(progression.complete_challenge(2).is_none());
        assert_eq!(progression.total_points(), 195);
    }

    #[test]
    fn test_unknown_challenge_is_ignored() {
        let mut progression = engine();
        assert!(progression.complete_challenge(42).is_none());
        assert_eq!(progression.total_points(), 120);
    }

    #[test]
    fn test_seed_ignores_precompleted_challenges() {
        let mut progression =
            ProgressionEngine::new(vec![challenge(1, 50, false), challenge(2, 75, true)], 120);
        assert_eq!(progression.total_points(), 120);
        assert_eq!(progression.completed_count(), 1);

        assert!(progression.complete_challenge(2).is_none());
        assert_eq!(progression.total_points(), 120);
    }

    #[test]
    fn test_challenges_in_id_order() {
        let progression = ProgressionEngine::new(
            vec![challenge(3, 10, false), challenge(1, 10, false)],
            0,
        );
        let ids: Vec<u32> = progression.challenges().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(BadgeTier::for_points(0), BadgeTier::Starter);
        assert_eq!(BadgeTier::for_points(149), BadgeTier::Starter);
        assert_eq!(BadgeTier::for_points(150), BadgeTier::Bronze);
        assert_eq!(BadgeTier::for_points(299), BadgeTier::Bronze);
        assert_eq!(BadgeTier::for_points(300), BadgeTier::Silver);
        assert_eq!(BadgeTier::for_points(499), BadgeTier::Silver);
        assert_eq!(BadgeTier::for_points(500), BadgeTier::Gold);
        assert_eq!(BadgeTier::for_points(u32::MAX), BadgeTier::Gold);
    }

    #[test]
    fn test_band_labels() {
        let bands: Vec<String> = BadgeTier::ALL.iter().map(|t| t.band_label()).collect();
        assert_eq!(
            bands,
            vec![
                "Starter: 0-149 pts",
                "Bronze: 150-299 pts",
                "Silver: 300-499 pts",
                "Gold: 500+ pts",
            ]
        );
    }

    #[test]
    fn test_gold_has_no_next_tier() {
        let mut progression = ProgressionEngine::new(vec![challenge(1, 400, false)], 120);
        progression.complete_challenge(1);
        assert_eq!(progression.badge_tier(), BadgeTier::Gold);
        assert_eq!(progression.next_tier(), None);
        assert_eq!(progression.points_to_next_tier(), 0);
        assert_eq!(progression.tier_progress(), 1.0);
    }

    #[test]
    fn test_tier_progress_within_band() {
        let progression = ProgressionEngine::new(Vec::new(), 225);
        assert_eq!(progression.badge_tier(), BadgeTier::Bronze);
        assert_eq!(progression.tier_progress(), 0.5);
    }

    proptest! {
        #[test]
        fn badge_tier_is_monotonic(a in any::<u32>(), b in any::<u32>()) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(BadgeTier::for_points(low) <= BadgeTier::for_points(high));
        }

        #[test]
        fn points_to_next_tier_reaches_next_tier(seed in 0u32..1000) {
            let progression = ProgressionEngine::new(Vec::new(), seed);
            let gap = progression.points_to_next_tier();
            match progression.next_tier() {
                Some(next) => {
                    prop_assert!(gap > 0);
                    prop_assert_eq!(BadgeTier::for_points(seed + gap), next);
                    prop_assert_eq!(BadgeTier::for_points(seed + gap - 1), progression.badge_tier());
                }
                None => prop_assert_eq!(gap, 0),
            }
        }
    }
}
