// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Node resolution: which nodes hold a stale workspace of this job.
//!
//! Location-stable jobs are resolved through their label's current members.
//! Roaming jobs have no canonical per-node path, so their candidates come
//! from the workspaces recorded by earlier builds.

use std::collections::HashSet;

use wsc_adapters::{BuildHost, HostError};
use wsc_core::{BuildRecord, Job, LabelName, NodeName, WorkspacePath};

use crate::log::BuildLog;
use crate::report;

/// A node whose workspace should be purged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub node: NodeName,
    /// `None` when the node is offline or has no workspace for the job.
    pub workspace: Option<WorkspacePath>,
}

impl Candidate {
    /// Node name as written to the build log.
    pub fn label(&self) -> &str {
        self.node.display_label()
    }
}

/// Prior builds of a job, newest first, read lazily from the host.
///
/// Ends when the host reports no predecessor. A predecessor whose number
/// does not decrease is reported as broken history, so a cyclic chain
/// cannot loop forever. Iteration stops after the first error.
pub struct History<'a> {
    host: &'a dyn BuildHost,
    cursor: Option<BuildRecord>,
}

impl<'a> History<'a> {
    pub fn new(host: &'a dyn BuildHost, build: &BuildRecord) -> Self {
        Self { host, cursor: Some(build.clone()) }
    }
}

impl Iterator for History<'_> {
    type Item = Result<BuildRecord, HostError>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor.take()?;
        match self.host.previous_build(&current) {
            Ok(Some(previous)) if previous.number >= current.number => {
                Some(Err(HostError::BrokenHistory {
                    job: current.job.clone(),
                    number: current.number,
                    reason: format!("predecessor #{} is not older", previous.number),
                }))
            }
            Ok(Some(previous)) => {
                self.cursor = Some(previous.clone());
                Some(Ok(previous))
            }
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Resolve the nodes whose workspace of `build`'s job should be purged.
///
/// The node `build` ran on is never a candidate, and each node appears at
/// most once. Host failures are returned unchanged.
pub fn resolve_candidates(
    host: &dyn BuildHost,
    build: &BuildRecord,
    log: &dyn BuildLog,
) -> Result<Vec<Candidate>, HostError> {
    let job = host.job(build)?;
    let candidates = if !job.has_fixed_workspace() {
        by_history(host, build)?
    } else if let Some(label) = job.label() {
        by_label(host, build, &job, label)
    } else {
        log.println(report::SKIP_ROAMING);
        Vec::new()
    };

    for candidate in &candidates {
        tracing::debug!(
            job = %job.name,
            build = build.number,
            placement = %job.placement,
            node = candidate.label(),
            workspace = ?candidate.workspace,
            "resolved cleanup candidate"
        );
    }
    Ok(candidates)
}

fn by_label(host: &dyn BuildHost, build: &BuildRecord, job: &Job, label: &LabelName) -> Vec<Candidate> {
    let Some(members) = host.label_members(label) else {
        tracing::debug!(job = %job.name, %label, "label has no members");
        return Vec::new();
    };

    let mut seen = HashSet::new();
    members
        .into_iter()
        .filter(|node| node.name != build.built_on)
        .filter(|node| seen.insert(node.name.clone()))
        .map(|node| Candidate { workspace: host.workspace_for(&node, job), node: node.name })
        .collect()
}

fn by_history(host: &dyn BuildHost, build: &BuildRecord) -> Result<Vec<Candidate>, HostError> {
    let mut cleaned: HashSet<NodeName> = HashSet::new();
    let mut candidates = Vec::new();
    for previous in History::new(host, build) {
        let previous = previous?;
        if previous.built_on == build.built_on || cleaned.contains(&previous.built_on) {
            continue;
        }
        cleaned.insert(previous.built_on.clone());
        candidates.push(Candidate { node: previous.built_on, workspace: previous.workspace });
    }
    Ok(candidates)
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
