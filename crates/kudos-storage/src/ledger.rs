// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Standalone ledger implementations for access outside a unit of work,
//! e.g. CLI queries. Each call takes the ledger lock for its duration so
//! it never observes an open transaction on the shared connection.

use async_trait::async_trait;

use kudos_core::{BadgeCard, BadgeLedger, KudosError, ScoreCard, ScoreLedger, UserId};

use crate::database::Database;
use crate::queries;

/// Score ledger operating in autocommit mode.
pub struct SqliteScoreLedger {
    db: Database,
}

impl SqliteScoreLedger {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ScoreLedger for SqliteScoreLedger {
    async fn append(&self, card: ScoreCard) -> Result<ScoreCard, KudosError> {
        let _guard = self.db.ledger_lock().lock_owned().await;
        queries::scores::insert_score(&self.db, &card).await
    }

    async fn total_score_for_user(&self, user_id: UserId) -> Result<Option<i64>, KudosError> {
        let _guard = self.db.ledger_lock().lock_owned().await;
        queries::scores::total_score_for_user(&self.db, user_id).await
    }

    async fn scores_for_user_newest_first(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ScoreCard>, KudosError> {
        let _guard = self.db.ledger_lock().lock_owned().await;
        queries::scores::scores_for_user_newest_first(&self.db, user_id).await
    }
}

/// Badge ledger operating in autocommit mode.
pub struct SqliteBadgeLedger {
    db: Database,
}

impl SqliteBadgeLedger {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BadgeLedger for SqliteBadgeLedger {
    async fn append_all(&self, cards: Vec<BadgeCard>) -> Result<Vec<BadgeCard>, KudosError> {
        let _guard = self.db.ledger_lock().lock_owned().await;
        // The savepoint inside insert_badges makes the batch atomic here.
        queries::badges::insert_badges(&self.db, cards).await
    }

    async fn badges_for_user_newest_first(
        &self,
        user_id: UserId,
    ) -> Result<Vec<BadgeCard>, KudosError> {
        let _guard = self.db.ledger_lock().lock_owned().await;
        queries::badges::badges_for_user_newest_first(&self.db, user_id).await
    }
}
