// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! First won badge: the user's first correctly solved attempt.

use kudos_core::{BadgeRule, BadgeType, ChallengeSolved, ScoreCard};

/// Fires when the score history holds exactly one card, i.e. the score
/// just recorded for the triggering attempt is the user's first.
pub struct FirstWonRule;

impl BadgeRule for FirstWonRule {
    fn badge_type(&self) -> BadgeType {
        BadgeType::FirstWon
    }

    fn evaluate(
        &self,
        _total_score: i64,
        score_history: &[ScoreCard],
        _fact: &ChallengeSolved,
    ) -> Option<BadgeType> {
        (score_history.len() == 1).then_some(BadgeType::FirstWon)
    }
}
