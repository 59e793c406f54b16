// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Concrete badge rules, one module per badge kind.
//!
//! The rule set is fixed at build time: adding a badge means adding a
//! variant to `BadgeType`, a rule module here, and an entry in
//! [`default_rules`]. No runtime discovery.

use std::sync::Arc;

use kudos_core::BadgeRule;

pub mod first_won;
pub mod lucky_number;
pub mod score_threshold;

pub use first_won::FirstWonRule;
pub use lucky_number::LuckyNumberRule;
pub use score_threshold::ScoreThresholdRule;

/// The full badge rule registry, in evaluation order.
pub fn default_rules() -> Vec<Arc<dyn BadgeRule>> {
    vec![
        Arc::new(FirstWonRule),
        Arc::new(ScoreThresholdRule::bronze()),
        Arc::new(ScoreThresholdRule::silver()),
        Arc::new(ScoreThresholdRule::gold()),
        Arc::new(LuckyNumberRule),
    ]
}
