// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use serde::Serialize;
use wsc_engine::Candidate;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One resolved candidate, as printed by `wsc candidates`.
#[derive(Debug, Serialize, PartialEq)]
pub struct CandidateRow {
    pub node: String,
    pub workspace: Option<String>,
}

impl From<&Candidate> for CandidateRow {
    fn from(c: &Candidate) -> Self {
        Self {
            node: c.label().to_string(),
            workspace: c.workspace.as_ref().map(|ws| ws.path.display().to_string()),
        }
    }
}

/// Render candidate rows, one `node<TAB>path` line each (`-` when offline).
pub fn format_candidates(rows: &[CandidateRow], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Text => Ok(rows
            .iter()
            .map(|r| format!("{}\t{}", r.node, r.workspace.as_deref().unwrap_or("-")))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
