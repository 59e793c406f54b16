// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Unit-of-work boundary over both ledgers.
//!
//! Everything an attempt writes (one score card, zero or more badge cards)
//! must become visible atomically, and the badge rules read total score and
//! held badges as part of their decision. A [`UnitOfWork`] therefore spans
//! the whole write-score / read-state / write-badges sequence with an
//! explicit commit or rollback at the end.

use async_trait::async_trait;

use crate::error::KudosError;
use crate::traits::ledger::{BadgeLedger, ScoreLedger};

/// One open transaction across the score and badge ledgers.
///
/// Dropping a unit of work without calling [`commit`](Self::commit) must
/// leave no writes visible; implementations may defer the actual rollback
/// to the next `begin`.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Score ledger view bound to this transaction.
    fn scores(&self) -> &dyn ScoreLedger;

    /// Badge ledger view bound to this transaction.
    fn badges(&self) -> &dyn BadgeLedger;

    /// Make all writes issued through this unit of work visible.
    async fn commit(self: Box<Self>) -> Result<(), KudosError>;

    /// Discard all writes issued through this unit of work.
    async fn rollback(self: Box<Self>) -> Result<(), KudosError>;
}

/// Factory for units of work.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Begin a new unit of work.
    ///
    /// Implementations must guarantee that two concurrently open units of
    /// work cannot interleave their read-then-write sequences for the same
    /// user; otherwise two racing evaluations of the same badge rule could
    /// both award the badge.
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, KudosError>;
}
