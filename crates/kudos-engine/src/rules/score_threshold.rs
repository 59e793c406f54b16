// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Score threshold badges: bronze, silver, and gold multiplicator.

use kudos_core::{BadgeRule, BadgeType, ChallengeSolved, ScoreCard};

/// Fires once the user's total score reaches a fixed threshold.
///
/// One instance per threshold badge; the engine's already-held check keeps
/// the badge from being awarded again on every later attempt.
pub struct ScoreThresholdRule {
    badge: BadgeType,
    threshold: i64,
}

impl ScoreThresholdRule {
    pub fn new(badge: BadgeType, threshold: i64) -> Self {
        Self { badge, threshold }
    }

    pub fn bronze() -> Self {
        Self::new(BadgeType::BronzeMultiplicator, 50)
    }

    pub fn silver() -> Self {
        Self::new(BadgeType::SilverMultiplicator, 250)
    }

    pub fn gold() -> Self {
        Self::new(BadgeType::GoldMultiplicator, 500)
    }
}

impl BadgeRule for ScoreThresholdRule {
    fn badge_type(&self) -> BadgeType {
        self.badge
    }

    fn evaluate(
        &self,
        total_score: i64,
        _score_history: &[ScoreCard],
        _fact: &ChallengeSolved,
    ) -> Option<BadgeType> {
        (total_score >= self.threshold).then_some(self.badge)
    }
}
