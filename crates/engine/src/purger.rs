// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace purging with per-node fault isolation.

use tokio_util::sync::CancellationToken;
use wsc_adapters::{TransportError, WorkspaceTransport};

use crate::interrupt::Interrupt;
use crate::log::BuildLog;
use crate::report;
use crate::resolver::Candidate;

/// Result of purging one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurgeOutcome {
    /// Workspace contents were deleted.
    Cleaned,
    /// No workspace path: the node is offline or never ran the job.
    Missing,
    /// Deletion failed; carries the reported message.
    Failed(String),
}

impl PurgeOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Delete the contents of `candidate`'s workspace.
///
/// Never fails: every error is written to `log` and returned as
/// [`PurgeOutcome::Failed`]. An interrupt raised before or during the
/// deletion abandons it; no retry is attempted. An abandoned deletion has
/// stopped by the time this returns.
pub async fn purge(
    transport: &dyn WorkspaceTransport,
    interrupt: &Interrupt,
    candidate: &Candidate,
    log: &dyn BuildLog,
) -> PurgeOutcome {
    let label = candidate.label();
    log.println(&report::cleaning_on(label));

    let Some(workspace) = &candidate.workspace else {
        log.println(&report::no_workspace(label));
        tracing::info!(node = label, "no workspace found, node is maybe offline");
        return PurgeOutcome::Missing;
    };

    let cancel = CancellationToken::new();
    let mut deletion = transport.delete_contents(workspace, &cancel);
    let finished = tokio::select! {
        biased;
        () = interrupt.raised() => None,
        result = &mut deletion => Some(result),
    };
    let result = match finished {
        Some(result) => result,
        None => {
            // Wait for the transport to stop so deletions never overlap
            cancel.cancel();
            if let Err(e) = deletion.await {
                tracing::debug!(node = label, error = %e, "abandoned deletion stopped");
            }
            Err(TransportError::Interrupted)
        }
    };

    match result {
        Ok(()) => PurgeOutcome::Cleaned,
        Err(e) => {
            let message = e.to_string();
            log.println(&report::cannot_delete(label, &message));
            tracing::warn!(
                node = label,
                path = %workspace.path.display(),
                error = %e,
                "failed to delete workspace contents"
            );
            PurgeOutcome::Failed(message)
        }
    }
}

#[cfg(test)]
#[path = "purger_tests.rs"]
mod tests;
