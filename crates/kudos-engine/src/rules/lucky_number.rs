// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lucky number badge: either factor of the solved challenge is 42.

use kudos_core::{BadgeRule, BadgeType, ChallengeSolved, ScoreCard};

const LUCKY_NUMBER: i32 = 42;

/// Fires on the raw factor values of the triggering fact; total score and
/// history are ignored.
pub struct LuckyNumberRule;

impl BadgeRule for LuckyNumberRule {
    fn badge_type(&self) -> BadgeType {
        BadgeType::LuckyNumber
    }

    fn evaluate(
        &self,
        _total_score: i64,
        _score_history: &[ScoreCard],
        fact: &ChallengeSolved,
    ) -> Option<BadgeType> {
        (fact.factor_a == LUCKY_NUMBER || fact.factor_b == LUCKY_NUMBER)
            .then_some(BadgeType::LuckyNumber)
    }
}
