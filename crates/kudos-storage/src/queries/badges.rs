// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Badge ledger queries.

use std::str::FromStr;

use kudos_core::KudosError;
use rusqlite::params;

use crate::database::Database;
use crate::models::{BadgeCard, BadgeType, UserId};

/// Insert a batch of badge cards, returning them with assigned identifiers.
///
/// Runs inside a savepoint: atomic when called standalone, nested when the
/// caller already holds an open transaction.
pub async fn insert_badges(
    db: &Database,
    cards: Vec<BadgeCard>,
) -> Result<Vec<BadgeCard>, KudosError> {
    if cards.is_empty() {
        return Ok(Vec::new());
    }
    db.connection()
        .call(move |conn| {
            let sp = conn.savepoint()?;
            let mut persisted = Vec::with_capacity(cards.len());
            for mut card in cards {
                sp.execute(
                    "INSERT INTO badge_cards (user_id, badge_type, badge_timestamp)
                     VALUES (?1, ?2, ?3)",
                    params![
                        card.user_id.0,
                        card.badge_type.to_string(),
                        card.badge_timestamp,
                    ],
                )?;
                card.badge_id = Some(sp.last_insert_rowid());
                persisted.push(card);
            }
            sp.commit()?;
            Ok(persisted)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// All badge cards for a user, newest first.
pub async fn badges_for_user_newest_first(
    db: &Database,
    user_id: UserId,
) -> Result<Vec<BadgeCard>, KudosError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT badge_id, user_id, badge_type, badge_timestamp
                 FROM badge_cards WHERE user_id = ?1
                 ORDER BY badge_timestamp DESC, badge_id DESC",
            )?;
            let rows = stmt.query_map(params![user_id.0], |row| {
                let raw: String = row.get(2)?;
                let badge_type = BadgeType::from_str(&raw).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        2,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?;
                Ok(BadgeCard {
                    badge_id: Some(row.get(0)?),
                    user_id: UserId(row.get(1)?),
                    badge_type,
                    badge_timestamp: row.get(3)?,
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
