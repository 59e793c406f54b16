// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ledger traits: append-mostly storage for one entity kind each,
//! queryable by user.

use async_trait::async_trait;

use crate::error::KudosError;
use crate::types::{BadgeCard, ScoreCard, UserId};

/// Storage for score cards.
#[async_trait]
pub trait ScoreLedger: Send + Sync {
    /// Append a score card, returning it with its identifier assigned.
    async fn append(&self, card: ScoreCard) -> Result<ScoreCard, KudosError>;

    /// Total accumulated score for the user, or `None` if the user has no
    /// scores at all.
    async fn total_score_for_user(&self, user_id: UserId) -> Result<Option<i64>, KudosError>;

    /// All score cards for the user, newest first.
    async fn scores_for_user_newest_first(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ScoreCard>, KudosError>;
}

/// Storage for badge cards.
#[async_trait]
pub trait BadgeLedger: Send + Sync {
    /// Append all cards as one batch, returning them with identifiers
    /// assigned. An empty batch is a no-op.
    async fn append_all(&self, cards: Vec<BadgeCard>) -> Result<Vec<BadgeCard>, KudosError>;

    /// All badge cards for the user, newest first.
    async fn badges_for_user_newest_first(
        &self,
        user_id: UserId,
    ) -> Result<Vec<BadgeCard>, KudosError>;
}
