// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for the Kudos gamification engine.
//!
//! Provides WAL-mode SQLite storage with embedded migrations, a
//! single-writer concurrency model via `tokio-rusqlite`, typed queries for
//! the score and badge ledgers, and a serialized unit-of-work
//! implementation that makes each attempt's writes atomic.

pub mod database;
pub mod ledger;
pub mod migrations;
pub mod models;
pub mod queries;
pub mod store;

pub use database::Database;
pub use ledger::{SqliteBadgeLedger, SqliteScoreLedger};
pub use store::{SqliteGameStore, SqliteUnitOfWork};
