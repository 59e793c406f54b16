// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All statements execute on tokio-rusqlite's single background thread. On
//! top of that, the ledger lock serializes whole units of work: a
//! transaction spans several `call` invocations, so its exclusivity must
//! outlive any single closure. Standalone reads take the same lock so they
//! never observe an open transaction on the shared connection.

use std::sync::Arc;

use kudos_core::KudosError;
use tokio::sync::Mutex;
use tracing::debug;

use crate::migrations;

/// Handle to the SQLite database backing both ledgers.
#[derive(Clone)]
pub struct Database {
    conn: tokio_rusqlite::Connection,
    ledger_lock: Arc<Mutex<()>>,
}

impl Database {
    /// Open (or create) the database at the configured path, apply PRAGMAs,
    /// and run any pending migrations.
    pub async fn open(config: &kudos_config::StorageConfig) -> Result<Self, KudosError> {
        let conn = tokio_rusqlite::Connection::open(&config.database_path)
            .await
            .map_err(|e| map_tr_err(e.into()))?;
        let wal_mode = config.wal_mode;
        conn.call(move |conn| -> Result<(), KudosError> {
            if wal_mode {
                conn.execute_batch("PRAGMA journal_mode=WAL;")
                    .map_err(|e| map_tr_err(e.into()))?;
            }
            conn.execute_batch(
                "PRAGMA busy_timeout=5000;
                 PRAGMA foreign_keys=ON;",
            )
            .map_err(|e| map_tr_err(e.into()))?;
            migrations::run_migrations(conn).map_err(|e| KudosError::Storage {
                source: Box::new(e),
            })?;
            Ok(())
        })
        .await
        .map_err(|e| match e {
            tokio_rusqlite::Error::Error(inner) => inner,
            other => KudosError::Storage {
                source: Box::new(other),
            },
        })?;
        debug!(path = %config.database_path, "SQLite database opened");
        Ok(Self {
            conn,
            ledger_lock: Arc::new(Mutex::new(())),
        })
    }

    /// The underlying tokio-rusqlite connection.
    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.conn
    }

    /// Lock serializing units of work and standalone ledger access.
    pub(crate) fn ledger_lock(&self) -> Arc<Mutex<()>> {
        Arc::clone(&self.ledger_lock)
    }

    /// Checkpoint the WAL, flushing committed writes into the main file.
    pub async fn close(&self) -> Result<(), KudosError> {
        self.conn
            .call(|conn| {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        debug!("WAL checkpoint complete");
        Ok(())
    }
}

/// Map tokio-rusqlite errors into the shared storage error.
pub(crate) fn map_tr_err(e: tokio_rusqlite::Error) -> KudosError {
    KudosError::Storage {
        source: Box::new(e),
    }
}
