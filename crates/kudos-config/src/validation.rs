// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes.

use thiserror::Error;

use crate::model::KudosConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Errors produced while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment failed to merge or deserialize the config sources.
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    /// The config deserialized but a value is semantically invalid.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Validate a deserialized configuration for semantic correctness.
pub fn validate_config(config: &KudosConfig) -> Result<(), ConfigError> {
    let level = config.game.log_level.trim();
    if !LOG_LEVELS.contains(&level) {
        return Err(ConfigError::Invalid(format!(
            "game.log_level must be one of {LOG_LEVELS:?}, got `{level}`"
        )));
    }

    if config.storage.database_path.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "storage.database_path must not be empty".to_string(),
        ));
    }

    Ok(())
}
