// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Kudos gamification engine.
//!
//! This crate provides the domain types (score cards, badge cards, the
//! challenge-solved fact), the shared error type, and the trait seams the
//! engine orchestrates across: the two ledgers, the unit-of-work boundary,
//! and the badge rule contract.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::KudosError;
pub use types::{AttemptId, BadgeCard, BadgeType, ChallengeSolved, GameResult, ScoreCard, UserId};

// Re-export all traits at crate root.
pub use traits::{BadgeLedger, BadgeRule, GameStore, ScoreLedger, UnitOfWork};
