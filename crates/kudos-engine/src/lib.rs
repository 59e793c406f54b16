// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scoring and badge evaluation engine for Kudos.
//!
//! [`GameEngine::record_attempt`] is the single entry point: it consumes a
//! challenge-solved fact, records a score card for correct attempts, runs
//! the badge rule registry against the user's accumulated state, and
//! persists any newly earned badges — all within one unit of work.

pub mod engine;
pub mod rules;

pub use engine::GameEngine;
pub use rules::default_rules;
