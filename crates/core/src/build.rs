// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build records: one execution of a job.

use crate::job::JobName;
use crate::node::NodeName;
use crate::workspace::WorkspacePath;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One execution of a job.
///
/// Records do not link to their predecessor; the host that owns the job's
/// history answers that query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRecord {
    pub job: JobName,
    pub number: u64,
    /// Node the build actually ran on (empty for the default node).
    #[serde(default)]
    pub built_on: NodeName,
    /// Workspace the build used, if the host recorded one.
    #[serde(default)]
    pub workspace: Option<WorkspacePath>,
}

impl BuildRecord {
    pub fn new(job: impl Into<JobName>, number: u64, built_on: impl Into<NodeName>) -> Self {
        Self { job: job.into(), number, built_on: built_on.into(), workspace: None }
    }

    pub fn with_workspace(mut self, workspace: WorkspacePath) -> Self {
        self.workspace = Some(workspace);
        self
    }
}

impl fmt::Display for BuildRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.job, self.number)
    }
}

crate::builder! {
    pub struct BuildRecordBuilder => BuildRecord {
        into {
            job: JobName = "app",
            built_on: NodeName = "",
        }
        set {
            number: u64 = 1,
        }
        option {
            workspace: WorkspacePath = None,
        }
    }
}

#[cfg(test)]
#[path = "build_tests.rs"]
mod tests;
