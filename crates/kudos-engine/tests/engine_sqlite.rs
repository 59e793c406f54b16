// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests driving the game engine against a real SQLite store.
//!
//! Each test creates an isolated temp database. Tests are independent and
//! order-insensitive.

use std::sync::Arc;

use async_trait::async_trait;
use kudos_config::StorageConfig;
use kudos_core::{
    AttemptId, BadgeCard, BadgeLedger, BadgeRule, BadgeType, ChallengeSolved, GameStore,
    KudosError, ScoreCard, ScoreLedger, UnitOfWork, UserId,
};
use kudos_engine::rules::{default_rules, LuckyNumberRule};
use kudos_engine::GameEngine;
use kudos_storage::{Database, SqliteBadgeLedger, SqliteGameStore, SqliteScoreLedger};
use tempfile::tempdir;

struct Fixture {
    db: Database,
    _dir: tempfile::TempDir,
}

impl Fixture {
    async fn new() -> Self {
        let dir = tempdir().unwrap();
        let config = StorageConfig {
            database_path: dir.path().join("test.db").to_string_lossy().into_owned(),
            wal_mode: true,
        };
        let db = Database::open(&config).await.unwrap();
        Self { db, _dir: dir }
    }

    fn engine(&self, rules: Vec<Arc<dyn BadgeRule>>) -> GameEngine {
        GameEngine::new(Arc::new(SqliteGameStore::new(self.db.clone())), rules)
    }

    fn lucky_only_engine(&self) -> GameEngine {
        self.engine(vec![Arc::new(LuckyNumberRule)])
    }

    fn scores(&self) -> SqliteScoreLedger {
        SqliteScoreLedger::new(self.db.clone())
    }

    fn badges(&self) -> SqliteBadgeLedger {
        SqliteBadgeLedger::new(self.db.clone())
    }
}

fn fact(user: i64, attempt: i64, correct: bool, factor_a: i32, factor_b: i32) -> ChallengeSolved {
    ChallengeSolved {
        user_id: UserId(user),
        attempt_id: AttemptId(attempt),
        user_alias: format!("user-{user}"),
        correct,
        factor_a,
        factor_b,
    }
}

// ---- Incorrect attempts ----

#[tokio::test]
async fn incorrect_attempt_scores_nothing_and_writes_nothing() {
    let fx = Fixture::new().await;
    let engine = fx.lucky_only_engine();

    // Scenario C: the 42 operand is irrelevant when the attempt failed.
    let result = engine
        .record_attempt(&fact(2, 200, false, 42, 1))
        .await
        .unwrap();
    assert_eq!(result.score, 0);
    assert!(result.badges.is_empty());

    assert_eq!(
        fx.scores().total_score_for_user(UserId(2)).await.unwrap(),
        None
    );
    assert!(fx
        .badges()
        .badges_for_user_newest_first(UserId(2))
        .await
        .unwrap()
        .is_empty());
}

// ---- Correct attempts ----

#[tokio::test]
async fn correct_attempt_writes_exactly_one_score_card() {
    let fx = Fixture::new().await;
    let engine = fx.lucky_only_engine();

    let result = engine
        .record_attempt(&fact(1, 100, true, 3, 5))
        .await
        .unwrap();
    assert_eq!(result.score, ScoreCard::DEFAULT_SCORE);
    assert!(result.badges.is_empty());

    let history = fx
        .scores()
        .scores_for_user_newest_first(UserId(1))
        .await
        .unwrap();
    assert_eq!(history.len(), 1);
    assert!(history[0].card_id.is_some());
    assert_eq!(history[0].user_id, UserId(1));
    assert_eq!(history[0].attempt_id, AttemptId(100));
    assert_eq!(history[0].score, ScoreCard::DEFAULT_SCORE);
}

#[tokio::test]
async fn lucky_number_badge_is_awarded_for_a_42_factor() {
    let fx = Fixture::new().await;
    let engine = fx.lucky_only_engine();

    // Scenario A.
    let result = engine
        .record_attempt(&fact(1, 100, true, 42, 7))
        .await
        .unwrap();
    assert_eq!(result.score, 10);
    assert_eq!(result.badges, vec![BadgeType::LuckyNumber]);

    let badges = fx
        .badges()
        .badges_for_user_newest_first(UserId(1))
        .await
        .unwrap();
    assert_eq!(badges.len(), 1);
    assert_eq!(badges[0].badge_type, BadgeType::LuckyNumber);
    assert!(badges[0].badge_id.is_some());
}

#[tokio::test]
async fn held_badge_is_never_awarded_twice() {
    let fx = Fixture::new().await;
    let engine = fx.lucky_only_engine();

    engine
        .record_attempt(&fact(1, 100, true, 42, 7))
        .await
        .unwrap();

    // Scenario B: points accrue, but no duplicate badge — not even when
    // the condition matches again.
    let result = engine
        .record_attempt(&fact(1, 101, true, 3, 5))
        .await
        .unwrap();
    assert_eq!(result.score, 10);
    assert!(result.badges.is_empty());

    let result = engine
        .record_attempt(&fact(1, 102, true, 42, 42))
        .await
        .unwrap();
    assert!(result.badges.is_empty());

    let badges = fx
        .badges()
        .badges_for_user_newest_first(UserId(1))
        .await
        .unwrap();
    assert_eq!(badges.len(), 1);
    assert_eq!(
        fx.scores().total_score_for_user(UserId(1)).await.unwrap(),
        Some(30)
    );
}

#[tokio::test]
async fn one_fact_can_earn_several_badges_at_once() {
    let fx = Fixture::new().await;
    let engine = fx.engine(default_rules());

    // First correct attempt with a 42 operand satisfies first_won and
    // lucky_number independently, in registry order.
    let result = engine
        .record_attempt(&fact(1, 100, true, 42, 7))
        .await
        .unwrap();
    assert_eq!(
        result.badges,
        vec![BadgeType::FirstWon, BadgeType::LuckyNumber]
    );

    let badges = fx
        .badges()
        .badges_for_user_newest_first(UserId(1))
        .await
        .unwrap();
    assert_eq!(badges.len(), 2);
    let ids: Vec<_> = badges.iter().map(|b| b.badge_id).collect();
    assert_ne!(ids[0], ids[1], "each badge gets its own card");
}

#[tokio::test]
async fn threshold_badges_fire_once_as_the_total_crosses_each_tier() {
    let fx = Fixture::new().await;
    let engine = fx.engine(default_rules());

    let mut all_earned = Vec::new();
    for attempt in 0..50i64 {
        let result = engine
            .record_attempt(&fact(1, attempt, true, 3, 5))
            .await
            .unwrap();
        all_earned.extend(result.badges);
    }

    // 50 attempts x 10 points: bronze at attempt 5 (50 points), silver at
    // 25 (250), gold at 50 (500); first_won on the very first.
    assert_eq!(
        all_earned,
        vec![
            BadgeType::FirstWon,
            BadgeType::BronzeMultiplicator,
            BadgeType::SilverMultiplicator,
            BadgeType::GoldMultiplicator,
        ]
    );
    assert_eq!(
        fx.scores().total_score_for_user(UserId(1)).await.unwrap(),
        Some(500)
    );
    assert_eq!(
        fx.badges()
            .badges_for_user_newest_first(UserId(1))
            .await
            .unwrap()
            .len(),
        4
    );
}

#[tokio::test]
async fn users_are_scored_independently() {
    let fx = Fixture::new().await;
    let engine = fx.engine(default_rules());

    engine
        .record_attempt(&fact(1, 100, true, 42, 7))
        .await
        .unwrap();
    let result = engine
        .record_attempt(&fact(2, 200, true, 42, 7))
        .await
        .unwrap();

    // User 2 earns their own first_won and lucky_number regardless of
    // user 1's badges.
    assert_eq!(
        result.badges,
        vec![BadgeType::FirstWon, BadgeType::LuckyNumber]
    );
    assert_eq!(
        fx.scores().total_score_for_user(UserId(2)).await.unwrap(),
        Some(10)
    );
}

// ---- Concurrency ----

#[tokio::test]
async fn concurrent_attempts_award_a_badge_kind_exactly_once() {
    let fx = Fixture::new().await;
    let engine = Arc::new(fx.lucky_only_engine());

    let mut handles = Vec::new();
    for attempt in 0..8i64 {
        let engine = Arc::clone(&engine);
        handles.push(tokio::spawn(async move {
            engine
                .record_attempt(&fact(1, attempt, true, 42, 7))
                .await
                .unwrap()
        }));
    }

    let mut awarded = 0;
    for handle in handles {
        let result = handle.await.unwrap();
        awarded += result.badges.len();
    }
    assert_eq!(awarded, 1, "exactly one call wins the badge");

    let badges = fx
        .badges()
        .badges_for_user_newest_first(UserId(1))
        .await
        .unwrap();
    assert_eq!(badges.len(), 1);
    assert_eq!(
        fx.scores().total_score_for_user(UserId(1)).await.unwrap(),
        Some(80)
    );
}

// ---- Missing-baseline degraded path ----

/// Store double whose total-score read always reports nothing, emulating
/// a backend that cannot establish a baseline right after the write.
struct NoBaselineStore {
    inner: SqliteGameStore,
}

struct NoBaselineUow {
    inner: Box<dyn UnitOfWork>,
}

#[async_trait]
impl GameStore for NoBaselineStore {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, KudosError> {
        Ok(Box::new(NoBaselineUow {
            inner: self.inner.begin().await?,
        }))
    }
}

#[async_trait]
impl ScoreLedger for NoBaselineUow {
    async fn append(&self, card: ScoreCard) -> Result<ScoreCard, KudosError> {
        self.inner.scores().append(card).await
    }

    async fn total_score_for_user(&self, _user_id: UserId) -> Result<Option<i64>, KudosError> {
        Ok(None)
    }

    async fn scores_for_user_newest_first(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ScoreCard>, KudosError> {
        self.inner.scores().scores_for_user_newest_first(user_id).await
    }
}

#[async_trait]
impl BadgeLedger for NoBaselineUow {
    async fn append_all(&self, cards: Vec<BadgeCard>) -> Result<Vec<BadgeCard>, KudosError> {
        self.inner.badges().append_all(cards).await
    }

    async fn badges_for_user_newest_first(
        &self,
        user_id: UserId,
    ) -> Result<Vec<BadgeCard>, KudosError> {
        self.inner.badges().badges_for_user_newest_first(user_id).await
    }
}

#[async_trait]
impl UnitOfWork for NoBaselineUow {
    fn scores(&self) -> &dyn ScoreLedger {
        self
    }

    fn badges(&self) -> &dyn BadgeLedger {
        self
    }

    async fn commit(self: Box<Self>) -> Result<(), KudosError> {
        self.inner.commit().await
    }

    async fn rollback(self: Box<Self>) -> Result<(), KudosError> {
        self.inner.rollback().await
    }
}

#[tokio::test]
async fn missing_baseline_keeps_the_points_and_skips_badges() {
    let fx = Fixture::new().await;
    let store = NoBaselineStore {
        inner: SqliteGameStore::new(fx.db.clone()),
    };
    let engine = GameEngine::new(Arc::new(store), default_rules());

    let result = engine
        .record_attempt(&fact(1, 100, true, 42, 7))
        .await
        .unwrap();
    assert_eq!(result.score, ScoreCard::DEFAULT_SCORE);
    assert!(result.badges.is_empty(), "badge evaluation is skipped");

    // The score commit still happened; only badges were skipped.
    assert_eq!(
        fx.scores().total_score_for_user(UserId(1)).await.unwrap(),
        Some(10)
    );
    assert!(fx
        .badges()
        .badges_for_user_newest_first(UserId(1))
        .await
        .unwrap()
        .is_empty());
}
