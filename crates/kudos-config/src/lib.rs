// SPDX-FileCopyrightText: 2026 Kudos Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Kudos gamification engine.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, and environment
//! variable overrides.
//!
//! # Usage
//!
//! ```no_run
//! let config = kudos_config::load_and_validate().expect("config errors");
//! println!("database: {}", config.storage.database_path);
//! ```

pub mod loader;
pub mod model;
pub mod validation;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{GameConfig, KudosConfig, StorageConfig};
pub use validation::ConfigError;

/// Load configuration from the XDG hierarchy and validate it.
pub fn load_and_validate() -> Result<KudosConfig, ConfigError> {
    let config = loader::load_config().map_err(Box::new)?;
    validation::validate_config(&config)?;
    Ok(config)
}

/// Load configuration from a specific file path and validate it.
pub fn load_and_validate_path(path: &std::path::Path) -> Result<KudosConfig, ConfigError> {
    let config = loader::load_config_from_path(path).map_err(Box::new)?;
    validation::validate_config(&config)?;
    Ok(config)
}
