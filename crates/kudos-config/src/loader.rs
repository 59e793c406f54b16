// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./kudos.toml` > `~/.config/kudos/kudos.toml` >
//! `/etc/kudos/kudos.toml` with environment variable overrides via the
//! `KUDOS_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::KudosConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/kudos/kudos.toml` (system-wide)
/// 3. `~/.config/kudos/kudos.toml` (user XDG config)
/// 4. `./kudos.toml` (local directory)
/// 5. `KUDOS_*` environment variables
pub fn load_config() -> Result<KudosConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(KudosConfig::default()))
        .merge(Toml::file("/etc/kudos/kudos.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("kudos/kudos.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("kudos.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<KudosConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(KudosConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<KudosConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(KudosConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `KUDOS_GAME_LOG_LEVEL` must map to
/// `game.log_level`, not `game.log.level`.
fn env_provider() -> Env {
    Env::prefixed("KUDOS_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: KUDOS_STORAGE_DATABASE_PATH -> "storage_database_path"
        let mapped = key
            .as_str()
            .replacen("game_", "game.", 1)
            .replacen("storage_", "storage.", 1);
        mapped.into()
    })
}
