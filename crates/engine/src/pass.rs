// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One cleanup pass: resolve candidates, then purge them in order.

use wsc_adapters::{BuildHost, HostError, WorkspaceTransport};
use wsc_core::BuildRecord;

use crate::interrupt::Interrupt;
use crate::log::BuildLog;
use crate::purger::{purge, PurgeOutcome};
use crate::report;
use crate::resolver::resolve_candidates;

/// Collaborators a cleanup pass runs against.
#[derive(Clone)]
pub struct CleanupContext<'a> {
    pub host: &'a dyn BuildHost,
    pub transport: &'a dyn WorkspaceTransport,
    pub interrupt: Interrupt,
}

impl<'a> CleanupContext<'a> {
    pub fn new(host: &'a dyn BuildHost, transport: &'a dyn WorkspaceTransport) -> Self {
        Self { host, transport, interrupt: Interrupt::new() }
    }

    pub fn with_interrupt(mut self, interrupt: Interrupt) -> Self {
        self.interrupt = interrupt;
        self
    }
}

/// Tally of one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub candidates: usize,
    pub cleaned: usize,
    pub missing: usize,
    pub failed: usize,
}

impl PassSummary {
    fn record(&mut self, outcome: &PurgeOutcome) {
        match outcome {
            PurgeOutcome::Cleaned => self.cleaned += 1,
            PurgeOutcome::Missing => self.missing += 1,
            PurgeOutcome::Failed(_) => self.failed += 1,
        }
    }
}

/// Run one cleanup pass for `build`.
///
/// Candidates are purged sequentially in resolution order and every one is
/// attempted regardless of earlier failures. Only host errors raised while
/// resolving candidates are returned.
pub async fn run_pass(
    ctx: &CleanupContext<'_>,
    build: &BuildRecord,
    log: &dyn BuildLog,
) -> Result<PassSummary, HostError> {
    log.println(report::PASS_HEADER);
    log.println(&report::running_on(&build.built_on));

    let candidates = resolve_candidates(ctx.host, build, log)?;

    let mut summary = PassSummary { candidates: candidates.len(), ..PassSummary::default() };
    for candidate in &candidates {
        let outcome = purge(ctx.transport, &ctx.interrupt, candidate, log).await;
        summary.record(&outcome);
    }

    tracing::info!(
        job = %build.job,
        build = build.number,
        node = build.built_on.display_label(),
        candidates = summary.candidates,
        cleaned = summary.cleaned,
        missing = summary.missing,
        failed = summary.failed,
        "cleanup pass finished"
    );
    Ok(summary)
}

#[cfg(test)]
#[path = "pass_tests.rs"]
mod tests;
