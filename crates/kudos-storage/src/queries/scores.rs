// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Score ledger queries.

use kudos_core::KudosError;
use rusqlite::params;

use crate::database::Database;
use crate::models::{AttemptId, ScoreCard, UserId};

/// Insert a score card, returning it with its assigned identifier.
pub async fn insert_score(db: &Database, card: &ScoreCard) -> Result<ScoreCard, KudosError> {
    let mut card = card.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO score_cards (user_id, attempt_id, score_timestamp, score)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    card.user_id.0,
                    card.attempt_id.0,
                    card.score_timestamp,
                    card.score,
                ],
            )?;
            card.card_id = Some(conn.last_insert_rowid());
            Ok(card)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Sum of all scores for a user, `None` if the user has no scores.
pub async fn total_score_for_user(
    db: &Database,
    user_id: UserId,
) -> Result<Option<i64>, KudosError> {
    db.connection()
        .call(move |conn| {
            // SUM over zero rows yields NULL, which maps to None.
            let total: Option<i64> = conn.query_row(
                "SELECT SUM(score) FROM score_cards WHERE user_id = ?1",
                params![user_id.0],
                |row| row.get(0),
            )?;
            Ok(total)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// All score cards for a user, newest first.
pub async fn scores_for_user_newest_first(
    db: &Database,
    user_id: UserId,
) -> Result<Vec<ScoreCard>, KudosError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT card_id, user_id, attempt_id, score_timestamp, score
                 FROM score_cards WHERE user_id = ?1
                 ORDER BY score_timestamp DESC, card_id DESC",
            )?;
            let rows = stmt.query_map(params![user_id.0], |row| {
                Ok(ScoreCard {
                    card_id: Some(row.get(0)?),
                    user_id: UserId(row.get(1)?),
                    attempt_id: AttemptId(row.get(2)?),
                    score_timestamp: row.get(3)?,
                    score: row.get(4)?,
                })
            })?;
            let mut cards = Vec::new();
            for row in rows {
                cards.push(row?);
            }
            Ok(cards)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kudos_config::StorageConfig;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let config = StorageConfig {
            database_path: dir.path().join("test.db").to_string_lossy().into_owned(),
            wal_mode: true,
        };
        let db = Database::open(&config).await.unwrap();
        (db, dir)
    }

    fn card_at(user: i64, attempt: i64, timestamp: i64) -> ScoreCard {
        let mut card = ScoreCard::new(UserId(user), AttemptId(attempt));
        card.score_timestamp = timestamp;
        card
    }

    #[tokio::test]
    async fn insert_assigns_identifier() {
        let (db, _dir) = setup_db().await;

        let unsaved = ScoreCard::new(UserId(1), AttemptId(100));
        assert_eq!(unsaved.card_id, None);

        let saved = insert_score(&db, &unsaved).await.unwrap();
        assert!(saved.card_id.is_some());
        assert_eq!(saved.score, ScoreCard::DEFAULT_SCORE);
        assert_eq!(saved.user_id, UserId(1));
        assert_eq!(saved.attempt_id, AttemptId(100));

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn total_is_none_for_unknown_user() {
        let (db, _dir) = setup_db().await;
        let total = total_score_for_user(&db, UserId(99)).await.unwrap();
        assert_eq!(total, None);
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn total_sums_all_cards() {
        let (db, _dir) = setup_db().await;

        insert_score(&db, &card_at(1, 100, 1_000)).await.unwrap();
        insert_score(&db, &card_at(1, 101, 2_000)).await.unwrap();
        insert_score(&db, &card_at(2, 200, 3_000)).await.unwrap();

        let total = total_score_for_user(&db, UserId(1)).await.unwrap();
        assert_eq!(total, Some(2 * ScoreCard::DEFAULT_SCORE as i64));

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn history_is_newest_first() {
        let (db, _dir) = setup_db().await;

        insert_score(&db, &card_at(1, 100, 1_000)).await.unwrap();
        insert_score(&db, &card_at(1, 101, 3_000)).await.unwrap();
        insert_score(&db, &card_at(1, 102, 2_000)).await.unwrap();

        let history = scores_for_user_newest_first(&db, UserId(1)).await.unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].attempt_id, AttemptId(101));
        assert_eq!(history[1].attempt_id, AttemptId(102));
        assert_eq!(history[2].attempt_id, AttemptId(100));

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn equal_timestamps_fall_back_to_insertion_order() {
        let (db, _dir) = setup_db().await;

        insert_score(&db, &card_at(1, 100, 1_000)).await.unwrap();
        insert_score(&db, &card_at(1, 101, 1_000)).await.unwrap();

        let history = scores_for_user_newest_first(&db, UserId(1)).await.unwrap();
        assert_eq!(history[0].attempt_id, AttemptId(101));
        assert_eq!(history[1].attempt_id, AttemptId(100));

        db.close().await.unwrap();
    }
}
