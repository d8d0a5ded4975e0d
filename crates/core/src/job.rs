// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Jobs and where their workspaces live.

use crate::node::LabelName;
use serde::{Deserialize, Serialize};

crate::define_name! {
    /// Name of a schedulable job.
    pub struct JobName;
}

/// Where a job's workspace lives on each node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "placement", rename_all = "kebab-case")]
pub enum Placement {
    /// The per-node workspace path is fixed, derived from node and job.
    ///
    /// A job without a label may run anywhere and is never cleaned.
    LocationStable {
        #[serde(default)]
        label: Option<LabelName>,
    },
    /// No fixed path; past workspaces are only known from build history.
    Roaming,
}

crate::simple_display! {
    Placement {
        LocationStable { .. } => "location-stable",
        Roaming => "roaming",
    }
}

/// A schedulable unit of build work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub name: JobName,
    #[serde(flatten)]
    pub placement: Placement,
}

impl Job {
    pub fn location_stable(name: impl Into<JobName>, label: Option<LabelName>) -> Self {
        Self { name: name.into(), placement: Placement::LocationStable { label } }
    }

    pub fn roaming(name: impl Into<JobName>) -> Self {
        Self { name: name.into(), placement: Placement::Roaming }
    }

    /// Whether the job has a deterministic per-node workspace path.
    pub fn has_fixed_workspace(&self) -> bool {
        matches!(self.placement, Placement::LocationStable { .. })
    }

    /// Assignment label, only meaningful for location-stable jobs.
    pub fn label(&self) -> Option<&LabelName> {
        match &self.placement {
            Placement::LocationStable { label } => label.as_ref(),
            Placement::Roaming => None,
        }
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
