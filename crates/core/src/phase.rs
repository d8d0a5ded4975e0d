// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! When a cleanup pass runs relative to the build's main work.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Which side of the build the cleanup pass runs on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CleanupPhase {
    /// Before the build's main work starts.
    Before,
    /// After the build's main work finishes, whatever its outcome.
    #[default]
    After,
}

crate::simple_display! {
    CleanupPhase {
        Before => "before",
        After => "after",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown cleanup phase '{0}' (expected 'before' or 'after')")]
pub struct PhaseParseError(pub String);

impl FromStr for CleanupPhase {
    type Err = PhaseParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "before" => Ok(Self::Before),
            "after" => Ok(Self::After),
            _ => Err(PhaseParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "phase_tests.rs"]
mod tests;
