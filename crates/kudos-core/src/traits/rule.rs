// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The badge rule contract: one implementation per badge kind.

use crate::types::{BadgeType, ChallengeSolved, ScoreCard};

/// Decides whether one specific badge is newly earned.
///
/// Rules are pure functions of their inputs: no hidden state, no I/O. The
/// engine supplies the user's total score, the full score history (newest
/// first, including the score just recorded for the triggering attempt),
/// and the triggering fact. Rules for badges the user already holds are
/// never invoked.
pub trait BadgeRule: Send + Sync {
    /// The fixed badge kind this rule evaluates.
    fn badge_type(&self) -> BadgeType;

    /// Returns this rule's badge kind if the eligibility condition holds,
    /// otherwise `None`.
    fn evaluate(
        &self,
        total_score: i64,
        score_history: &[ScoreCard],
        fact: &ChallengeSolved,
    ) -> Option<BadgeType>;
}
