// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed query modules for the two ledger tables.
//!
//! Query functions run individual statements without opening transactions
//! of their own; the caller decides the transaction boundary. The one
//! exception is the batch badge insert, which uses a savepoint so it is
//! atomic standalone and nests cleanly inside an open unit of work.

pub mod badges;
pub mod scores;
