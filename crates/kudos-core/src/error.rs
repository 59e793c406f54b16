// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Kudos gamification engine.

use thiserror::Error;

/// The primary error type used across the ledger traits and the game engine.
///
/// Storage errors are fatal to the attempt being processed: the engine
/// never retries or swallows them, it rolls back and propagates.
#[derive(Debug, Error)]
pub enum KudosError {
    /// Configuration errors (invalid TOML, unknown fields, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database open, query failure, transaction).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
