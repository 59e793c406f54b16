// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The game engine: turns one challenge-solved fact into zero-or-one score
//! card plus zero-or-more badge cards.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{error, info, warn};

use kudos_core::{
    BadgeCard, BadgeRule, BadgeType, ChallengeSolved, GameResult, GameStore, KudosError,
    ScoreCard, UnitOfWork,
};

/// Orchestrates scoring and badge evaluation over a [`GameStore`] and an
/// ordered badge rule registry fixed at construction.
pub struct GameEngine {
    store: Arc<dyn GameStore>,
    rules: Vec<Arc<dyn BadgeRule>>,
}

impl GameEngine {
    pub fn new(store: Arc<dyn GameStore>, rules: Vec<Arc<dyn BadgeRule>>) -> Self {
        Self { store, rules }
    }

    /// Process one challenge-solved fact.
    ///
    /// Incorrect attempts short-circuit: no score, no badge evaluation,
    /// no writes. Correct attempts record a score and evaluate every rule
    /// whose badge the user does not already hold, all inside one unit of
    /// work — either everything commits or nothing is visible.
    pub async fn record_attempt(&self, fact: &ChallengeSolved) -> Result<GameResult, KudosError> {
        if !fact.correct {
            info!(
                attempt_id = fact.attempt_id.0,
                user_id = fact.user_id.0,
                "attempt is not correct, user gets no score"
            );
            return Ok(GameResult::no_score());
        }

        let uow = self.store.begin().await?;
        match self.process_correct_attempt(uow.as_ref(), fact).await {
            Ok(result) => {
                uow.commit().await?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = uow.rollback().await {
                    error!(error = %rollback_err, "rollback failed after attempt error");
                }
                Err(e)
            }
        }
    }

    async fn process_correct_attempt(
        &self,
        uow: &dyn UnitOfWork,
        fact: &ChallengeSolved,
    ) -> Result<GameResult, KudosError> {
        let card = uow
            .scores()
            .append(ScoreCard::new(fact.user_id, fact.attempt_id))
            .await?;
        info!(
            user = %fact.user_alias,
            points = card.score,
            attempt_id = fact.attempt_id.0,
            "user scored points for attempt"
        );

        // The score was just written, so a missing total should be
        // impossible; the contract still tolerates it by skipping badge
        // evaluation rather than failing the attempt.
        let Some(total_score) = uow.scores().total_score_for_user(fact.user_id).await? else {
            warn!(
                user_id = fact.user_id.0,
                "no total score found after recording one, skipping badge evaluation"
            );
            return Ok(GameResult::new(card.score, Vec::new()));
        };

        let score_history = uow
            .scores()
            .scores_for_user_newest_first(fact.user_id)
            .await?;
        let held: HashSet<BadgeType> = uow
            .badges()
            .badges_for_user_newest_first(fact.user_id)
            .await?
            .into_iter()
            .map(|b| b.badge_type)
            .collect();

        // Evaluate every eligible rule; one attempt may satisfy several
        // independent badge conditions at once.
        let earned: Vec<BadgeType> = self
            .rules
            .iter()
            .filter(|rule| !held.contains(&rule.badge_type()))
            .filter_map(|rule| rule.evaluate(total_score, &score_history, fact))
            .collect();

        if !earned.is_empty() {
            let cards: Vec<BadgeCard> = earned
                .iter()
                .map(|&badge_type| BadgeCard::new(fact.user_id, badge_type))
                .collect();
            uow.badges().append_all(cards).await?;
            info!(
                user = %fact.user_alias,
                badges = ?earned,
                "user earned new badges"
            );
        }

        Ok(GameResult::new(card.score, earned))
    }
}
