// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Queries the cleanup core makes against the build host.

use thiserror::Error;
use wsc_core::{BuildRecord, Job, JobName, LabelName, Node, WorkspacePath};

/// Errors raised by the host while answering a query.
///
/// These describe broken host state (e.g. a history chain pointing at a job
/// the host no longer knows) and are not recovered by the cleanup pass.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("unknown job '{0}'")]
    UnknownJob(JobName),
    #[error("broken build history for {job}#{number}: {reason}")]
    BrokenHistory { job: JobName, number: u64, reason: String },
}

/// Read-only view of the build host's jobs, nodes, and history.
///
/// Every query reads current host state; nothing is cached between calls.
pub trait BuildHost: Send + Sync {
    /// The job a build belongs to.
    fn job(&self, build: &BuildRecord) -> Result<Job, HostError>;

    /// Current members of a label, or `None` if the label resolves to nothing.
    fn label_members(&self, label: &LabelName) -> Option<Vec<Node>>;

    /// Workspace of `job` on `node`, or `None` if the node is offline or has
    /// never run the job.
    fn workspace_for(&self, node: &Node, job: &Job) -> Option<WorkspacePath>;

    /// The chronologically previous build of the same job.
    fn previous_build(&self, build: &BuildRecord) -> Result<Option<BuildRecord>, HostError>;
}
