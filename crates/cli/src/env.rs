// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

/// Default tracing filter when `WSC_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Resolve config file: WSC_CONFIG > XDG_CONFIG_HOME/wsc/config.toml > ~/.config/wsc/config.toml
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("WSC_CONFIG") {
        return Some(PathBuf::from(path));
    }
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg).join("wsc/config.toml"));
    }
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/wsc/config.toml"))
}

/// Whether the config path came from `WSC_CONFIG` (and so must exist).
pub fn config_path_is_explicit() -> bool {
    std::env::var_os("WSC_CONFIG").is_some()
}

/// Tracing filter directive (`WSC_LOG`, e.g. `info` or `wsc_engine=debug`)
pub fn log_filter() -> String {
    std::env::var("WSC_LOG").ok().filter(|s| !s.is_empty()).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
