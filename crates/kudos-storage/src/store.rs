// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the unit-of-work boundary.
//!
//! A [`SqliteUnitOfWork`] holds the database's ledger lock for its entire
//! lifetime and brackets `BEGIN IMMEDIATE` / `COMMIT` / `ROLLBACK`
//! explicitly. Because the lock spans the whole read-evaluate-write
//! sequence of an attempt, units of work are serialized: two concurrent
//! attempts can never interleave, which closes the read-then-write badge
//! race for same-user attempts.

use async_trait::async_trait;
use tokio::sync::OwnedMutexGuard;

use kudos_core::{
    BadgeCard, BadgeLedger, GameStore, KudosError, ScoreCard, ScoreLedger, UnitOfWork, UserId,
};

use crate::database::{map_tr_err, Database};
use crate::queries;

/// Factory handing out serialized SQLite units of work.
pub struct SqliteGameStore {
    db: Database,
}

impl SqliteGameStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GameStore for SqliteGameStore {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, KudosError> {
        let guard = self.db.ledger_lock().lock_owned().await;
        self.db
            .connection()
            .call(|conn| {
                if !conn.is_autocommit() {
                    // A previously dropped unit of work left its transaction
                    // open; discard it before starting ours.
                    conn.execute_batch("ROLLBACK;")?;
                }
                conn.execute_batch("BEGIN IMMEDIATE;")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        Ok(Box::new(SqliteUnitOfWork {
            db: self.db.clone(),
            _guard: guard,
        }))
    }
}

/// One open transaction, exclusive over the database until committed or
/// rolled back.
pub struct SqliteUnitOfWork {
    db: Database,
    _guard: OwnedMutexGuard<()>,
}

#[async_trait]
impl ScoreLedger for SqliteUnitOfWork {
    async fn append(&self, card: ScoreCard) -> Result<ScoreCard, KudosError> {
        queries::scores::insert_score(&self.db, &card).await
    }

    async fn total_score_for_user(&self, user_id: UserId) -> Result<Option<i64>, KudosError> {
        queries::scores::total_score_for_user(&self.db, user_id).await
    }

    async fn scores_for_user_newest_first(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ScoreCard>, KudosError> {
        queries::scores::scores_for_user_newest_first(&self.db, user_id).await
    }
}

#[async_trait]
impl BadgeLedger for SqliteUnitOfWork {
    async fn append_all(&self, cards: Vec<BadgeCard>) -> Result<Vec<BadgeCard>, KudosError> {
        queries::badges::insert_badges(&self.db, cards).await
    }

    async fn badges_for_user_newest_first(
        &self,
        user_id: UserId,
    ) -> Result<Vec<BadgeCard>, KudosError> {
        queries::badges::badges_for_user_newest_first(&self.db, user_id).await
    }
}

#[async_trait]
impl UnitOfWork for SqliteUnitOfWork {
    fn scores(&self) -> &dyn ScoreLedger {
        self
    }

    fn badges(&self) -> &dyn BadgeLedger {
        self
    }

    async fn commit(self: Box<Self>) -> Result<(), KudosError> {
        self.db
            .connection()
            .call(|conn| {
                conn.execute_batch("COMMIT;")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)
    }

    async fn rollback(self: Box<Self>) -> Result<(), KudosError> {
        self.db
            .connection()
            .call(|conn| {
                conn.execute_batch("ROLLBACK;")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)
    }
}
