// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory build host loaded from a fleet description.
//!
//! A fleet file lists nodes, jobs, and past builds:
//!
//! ```toml
//! [[node]]
//! name = "node1"
//! labels = ["linux"]
//! root = "/srv/ws/node1"
//!
//! [[job]]
//! name = "app"
//! placement = "location-stable"
//! label = "linux"
//!
//! [[build]]
//! job = "app"
//! number = 15
//! node = "node1"
//! workspace = "/srv/ws/node1/app"
//! ```
//!
//! The workspace of a location-stable job on a node is `<root>/<job>`.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use wsc_core::{BuildRecord, Job, JobName, LabelName, Node, NodeName, WorkspacePath};

use crate::host::{BuildHost, HostError};

/// Errors from loading or querying a fleet description
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("failed to read fleet file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid fleet file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("node '{0}' is defined more than once")]
    DuplicateNode(String),
    #[error("job '{0}' is defined more than once")]
    DuplicateJob(JobName),
    #[error("build {job}#{number} is defined more than once")]
    DuplicateBuild { job: JobName, number: u64 },
    #[error("build {job}#{number} references unknown job")]
    UnknownJob { job: JobName, number: u64 },
    #[error("build {job}#{number} references unknown node '{node}'")]
    UnknownNode { job: JobName, number: u64, node: String },
    #[error("build {job}#{number} not found")]
    BuildNotFound { job: JobName, number: u64 },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FleetFile {
    #[serde(default, rename = "node")]
    nodes: Vec<NodeEntry>,
    #[serde(default, rename = "job")]
    jobs: Vec<Job>,
    #[serde(default, rename = "build")]
    builds: Vec<BuildEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeEntry {
    #[serde(default)]
    name: NodeName,
    #[serde(default)]
    labels: Vec<LabelName>,
    root: Option<PathBuf>,
    #[serde(default = "default_online")]
    online: bool,
}

fn default_online() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BuildEntry {
    job: JobName,
    number: u64,
    #[serde(default)]
    node: NodeName,
    workspace: Option<PathBuf>,
}

#[derive(Debug, Clone)]
struct FleetNode {
    node: Node,
    root: Option<PathBuf>,
    online: bool,
}

/// Snapshot of a build fleet: nodes, jobs, and each job's build history.
#[derive(Debug, Clone, Default)]
pub struct FleetSnapshot {
    nodes: Vec<FleetNode>,
    jobs: BTreeMap<JobName, Job>,
    builds: BTreeMap<JobName, BTreeMap<u64, BuildRecord>>,
}

impl FleetSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a fleet file.
    pub fn load(path: &Path) -> Result<Self, FleetError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| FleetError::Read { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a fleet description.
    pub fn from_toml_str(content: &str) -> Result<Self, FleetError> {
        let file: FleetFile = toml::from_str(content)?;

        let mut fleet = Self::new();
        let mut seen = HashSet::new();
        for entry in file.nodes {
            if !seen.insert(entry.name.clone()) {
                return Err(FleetError::DuplicateNode(entry.name.display_label().to_string()));
            }
            let node = Node { name: entry.name, labels: entry.labels };
            fleet.nodes.push(FleetNode { node, root: entry.root, online: entry.online });
        }

        for job in file.jobs {
            if fleet.jobs.contains_key(&job.name) {
                return Err(FleetError::DuplicateJob(job.name));
            }
            fleet.jobs.insert(job.name.clone(), job);
        }

        for entry in file.builds {
            if !fleet.jobs.contains_key(&entry.job) {
                return Err(FleetError::UnknownJob { job: entry.job, number: entry.number });
            }
            if fleet.find_node(&entry.node).is_none() {
                return Err(FleetError::UnknownNode {
                    job: entry.job,
                    number: entry.number,
                    node: entry.node.display_label().to_string(),
                });
            }
            let history = fleet.builds.entry(entry.job.clone()).or_default();
            if history.contains_key(&entry.number) {
                return Err(FleetError::DuplicateBuild { job: entry.job, number: entry.number });
            }
            let workspace = entry.workspace.map(|path| WorkspacePath::new(entry.node.clone(), path));
            let record = BuildRecord {
                job: entry.job,
                number: entry.number,
                built_on: entry.node,
                workspace,
            };
            history.insert(record.number, record);
        }

        Ok(fleet)
    }

    /// Add an online node whose workspaces live under `root`.
    pub fn with_node(mut self, node: Node, root: impl Into<PathBuf>) -> Self {
        self.nodes.push(FleetNode { node, root: Some(root.into()), online: true });
        self
    }

    /// Add a node that is currently unreachable.
    pub fn with_offline_node(mut self, node: Node) -> Self {
        self.nodes.push(FleetNode { node, root: None, online: false });
        self
    }

    pub fn with_job(mut self, job: Job) -> Self {
        self.jobs.insert(job.name.clone(), job);
        self
    }

    /// Record a past build. Later builds with the same number replace earlier ones.
    pub fn with_build(mut self, build: BuildRecord) -> Self {
        self.builds.entry(build.job.clone()).or_default().insert(build.number, build);
        self
    }

    /// Look up a recorded build.
    pub fn build(&self, job: &JobName, number: u64) -> Result<BuildRecord, FleetError> {
        self.builds
            .get(job)
            .and_then(|history| history.get(&number))
            .cloned()
            .ok_or_else(|| FleetError::BuildNotFound { job: job.clone(), number })
    }

    fn find_node(&self, name: &NodeName) -> Option<&FleetNode> {
        self.nodes.iter().find(|n| &n.node.name == name)
    }
}

impl BuildHost for FleetSnapshot {
    fn job(&self, build: &BuildRecord) -> Result<Job, HostError> {
        self.jobs.get(&build.job).cloned().ok_or_else(|| HostError::UnknownJob(build.job.clone()))
    }

    fn label_members(&self, label: &LabelName) -> Option<Vec<Node>> {
        let members: Vec<Node> = self
            .nodes
            .iter()
            .filter(|n| n.node.has_label(label))
            .map(|n| n.node.clone())
            .collect();
        if members.is_empty() {
            None
        } else {
            Some(members)
        }
    }

    fn workspace_for(&self, node: &Node, job: &Job) -> Option<WorkspacePath> {
        let entry = self.find_node(&node.name)?;
        if !entry.online {
            return None;
        }
        let root = entry.root.as_ref()?;
        Some(WorkspacePath::new(node.name.clone(), root.join(job.name.as_str())))
    }

    /// The recorded workspace is withheld while the build's node is offline.
    fn previous_build(&self, build: &BuildRecord) -> Result<Option<BuildRecord>, HostError> {
        let Some(history) = self.builds.get(&build.job) else {
            if self.jobs.contains_key(&build.job) {
                return Ok(None);
            }
            return Err(HostError::UnknownJob(build.job.clone()));
        };
        let Some((_, previous)) = history.range(..build.number).next_back() else {
            return Ok(None);
        };

        let mut previous = previous.clone();
        match self.find_node(&previous.built_on) {
            Some(node) if node.online => {}
            Some(_) => previous.workspace = None,
            None => {
                return Err(HostError::BrokenHistory {
                    job: previous.job.clone(),
                    number: previous.number,
                    reason: format!("node '{}' is not part of the fleet", previous.built_on.display_label()),
                });
            }
        }
        Ok(Some(previous))
    }
}

#[cfg(test)]
#[path = "fleet_tests.rs"]
mod tests;
