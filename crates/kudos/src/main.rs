// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Kudos - points and badges for challenge attempts.
//!
//! This is the binary entry point: it wires config, logging, the SQLite
//! store, and the game engine together.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kudos_config::KudosConfig;
use kudos_core::{AttemptId, BadgeLedger, ChallengeSolved, KudosError, ScoreLedger, UserId};
use kudos_engine::{default_rules, GameEngine};
use kudos_storage::{Database, SqliteBadgeLedger, SqliteGameStore, SqliteScoreLedger};

/// Kudos - points and badges for challenge attempts.
#[derive(Parser, Debug)]
#[command(name = "kudos", version, about, long_about = None)]
struct Cli {
    /// Path to a config file, overriding the XDG lookup.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Record one challenge attempt and report points and badges earned.
    Solve {
        /// User identifier.
        #[arg(long)]
        user: i64,
        /// User display name.
        #[arg(long)]
        alias: String,
        /// Attempt identifier.
        #[arg(long)]
        attempt: i64,
        /// First factor of the challenge.
        #[arg(long)]
        factor_a: i32,
        /// Second factor of the challenge.
        #[arg(long)]
        factor_b: i32,
        /// Mark the attempt as incorrect (no points, no badges).
        #[arg(long)]
        incorrect: bool,
    },
    /// Show a user's total score and held badges.
    Stats {
        /// User identifier.
        #[arg(long)]
        user: i64,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("kudos: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(&config.game.log_level);

    if let Err(e) = run(cli.command, &config).await {
        eprintln!("kudos: {e}");
        std::process::exit(1);
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<KudosConfig, kudos_config::ConfigError> {
    match path {
        Some(path) => kudos_config::load_and_validate_path(path),
        None => kudos_config::load_and_validate(),
    }
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(command: Commands, config: &KudosConfig) -> Result<(), KudosError> {
    if let Some(parent) = std::path::Path::new(&config.storage.database_path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| KudosError::Storage { source: e.into() })?;
    }
    let db = Database::open(&config.storage).await?;

    match command {
        Commands::Solve {
            user,
            alias,
            attempt,
            factor_a,
            factor_b,
            incorrect,
        } => {
            let store = Arc::new(SqliteGameStore::new(db.clone()));
            let engine = GameEngine::new(store, default_rules());
            let fact = ChallengeSolved {
                user_id: UserId(user),
                attempt_id: AttemptId(attempt),
                user_alias: alias,
                correct: !incorrect,
                factor_a,
                factor_b,
            };
            let result = engine.record_attempt(&fact).await?;

            println!("{} points", result.score);
            if result.badges.is_empty() {
                println!("no new badges");
            } else {
                for badge in &result.badges {
                    println!("new badge: {badge}");
                }
            }
        }
        Commands::Stats { user } => {
            let scores = SqliteScoreLedger::new(db.clone());
            let badges = SqliteBadgeLedger::new(db.clone());

            let total = scores
                .total_score_for_user(UserId(user))
                .await?
                .unwrap_or(0);
            println!("total score: {total}");

            for card in badges.badges_for_user_newest_first(UserId(user)).await? {
                println!("badge: {} (awarded {})", card.badge_type, format_ts(card.badge_timestamp));
            }
        }
    }

    db.close().await
}

fn format_ts(epoch_ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(epoch_ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| epoch_ms.to_string())
}
