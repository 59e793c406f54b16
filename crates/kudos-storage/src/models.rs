// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model types for storage entities.
//!
//! The canonical types live in `kudos-core::types` for use across trait
//! boundaries. This module re-exports them for convenience within the
//! storage crate.

pub use kudos_core::types::{AttemptId, BadgeCard, BadgeType, ScoreCard, UserId};
