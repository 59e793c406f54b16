// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Kudos workspace.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for one challenge attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttemptId(pub i64);

impl fmt::Display for AttemptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The badges a user can earn, one variant per badge kind.
///
/// New badge kinds are added here together with a rule implementation;
/// the storage layer persists the snake_case string form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BadgeType {
    /// Either factor of the solved challenge was 42.
    LuckyNumber,
    /// First correctly solved attempt.
    FirstWon,
    /// Total score reached 50 points.
    BronzeMultiplicator,
    /// Total score reached 250 points.
    SilverMultiplicator,
    /// Total score reached 500 points.
    GoldMultiplicator,
}

/// Points awarded for one correctly solved attempt.
///
/// `card_id` is assigned by the storage layer on persistence and is `None`
/// before. Two cards are equal only if both carry an assigned identifier
/// and those identifiers match; unsaved cards compare unequal to
/// everything, themselves included, which is why this is `PartialEq` but
/// deliberately not `Eq`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreCard {
    pub card_id: Option<i64>,
    pub user_id: UserId,
    pub attempt_id: AttemptId,
    /// Epoch milliseconds, set at construction and never mutated.
    pub score_timestamp: i64,
    pub score: i32,
}

impl ScoreCard {
    /// Points every correct attempt is worth. There are no partial scores.
    pub const DEFAULT_SCORE: i32 = 10;

    /// Build an unsaved card worth [`Self::DEFAULT_SCORE`] points,
    /// timestamped now.
    pub fn new(user_id: UserId, attempt_id: AttemptId) -> Self {
        Self {
            card_id: None,
            user_id,
            attempt_id,
            score_timestamp: Utc::now().timestamp_millis(),
            score: Self::DEFAULT_SCORE,
        }
    }
}

impl PartialEq for ScoreCard {
    fn eq(&self, other: &Self) -> bool {
        matches!((self.card_id, other.card_id), (Some(a), Some(b)) if a == b)
    }
}

/// One badge earned by one user, permanent once persisted.
///
/// Same identity semantics as [`ScoreCard`]: equality requires both sides
/// to carry an assigned `badge_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeCard {
    pub badge_id: Option<i64>,
    pub user_id: UserId,
    pub badge_type: BadgeType,
    /// Epoch milliseconds, set at construction.
    pub badge_timestamp: i64,
}

impl BadgeCard {
    /// Build an unsaved badge card timestamped now.
    pub fn new(user_id: UserId, badge_type: BadgeType) -> Self {
        Self {
            badge_id: None,
            user_id,
            badge_type,
            badge_timestamp: Utc::now().timestamp_millis(),
        }
    }
}

impl PartialEq for BadgeCard {
    fn eq(&self, other: &Self) -> bool {
        matches!((self.badge_id, other.badge_id), (Some(a), Some(b)) if a == b)
    }
}

/// One "challenge solved" fact as delivered by the inbound boundary.
///
/// Not persisted by the core; the boundary that constructs it is
/// responsible for shape validation and exactly-once delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeSolved {
    pub user_id: UserId,
    pub attempt_id: AttemptId,
    pub user_alias: String,
    pub correct: bool,
    pub factor_a: i32,
    pub factor_b: i32,
}

/// What one processed attempt produced: the points awarded (0 when the
/// attempt was incorrect) and the badge kinds newly earned, in rule
/// evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub score: i32,
    pub badges: Vec<BadgeType>,
}

impl GameResult {
    pub fn new(score: i32, badges: Vec<BadgeType>) -> Self {
        Self { score, badges }
    }

    /// The result of an incorrect attempt: no points, no badges.
    pub fn no_score() -> Self {
        Self {
            score: 0,
            badges: Vec::new(),
        }
    }
}
