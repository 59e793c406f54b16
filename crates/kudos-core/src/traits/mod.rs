// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the game engine and its collaborators.
//!
//! The ledger and store traits use `#[async_trait]` for dynamic dispatch
//! compatibility; [`BadgeRule`] is a pure synchronous contract.

pub mod ledger;
pub mod rule;
pub mod store;

// Re-export all traits at the traits module level for convenience.
pub use ledger::{BadgeLedger, ScoreLedger};
pub use rule::BadgeRule;
pub use store::{GameStore, UnitOfWork};
