// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operator configuration.
//!
//! ```toml
//! # ~/.config/wsc/config.toml
//! phase = "before"   # or "after" (default)
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use wsc_core::CleanupPhase;

use crate::env;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// When the cleanup pass runs relative to the build.
    #[serde(default)]
    pub phase: CleanupPhase,
}

impl Config {
    /// Load config from `explicit`, or from the default location.
    ///
    /// An explicit path (flag or `WSC_CONFIG`) must exist; a missing default
    /// file yields the default config.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::read(path);
        }
        let Some(path) = env::config_path() else {
            return Ok(Self::default());
        };
        if !env::config_path_is_explicit() && !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::read(&path)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
