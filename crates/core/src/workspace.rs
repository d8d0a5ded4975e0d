// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Location of a job's workspace on a node.

use crate::node::NodeName;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A workspace directory on a specific node (host + path).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkspacePath {
    pub node: NodeName,
    pub path: PathBuf,
}

impl WorkspacePath {
    pub fn new(node: impl Into<NodeName>, path: impl Into<PathBuf>) -> Self {
        Self { node: node.into(), path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for WorkspacePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.node.display_label(), self.path.display())
    }
}

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;
