// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build executor nodes and the labels that group them.

use serde::{Deserialize, Serialize};

/// How the default node (empty name) is shown in build logs.
pub const DEFAULT_NODE_LABEL: &str = "master";

crate::define_name! {
    /// Name of an execution node. The empty name denotes the default node.
    pub struct NodeName;
}

crate::define_name! {
    /// Name of an assignment-group label.
    pub struct LabelName;
}

impl NodeName {
    /// Whether this is the default node (empty name).
    pub fn is_default(&self) -> bool {
        self.is_empty()
    }

    /// Name as written to build logs, with the default node shown as `master`.
    pub fn display_label(&self) -> &str {
        if self.is_default() {
            DEFAULT_NODE_LABEL
        } else {
            self.as_str()
        }
    }
}

/// A named execution machine and the labels it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub name: NodeName,
    #[serde(default)]
    pub labels: Vec<LabelName>,
}

impl Node {
    pub fn new(name: impl Into<NodeName>) -> Self {
        Self { name: name.into(), labels: Vec::new() }
    }

    pub fn with_label(mut self, label: impl Into<LabelName>) -> Self {
        self.labels.push(label.into());
        self
    }

    pub fn has_label(&self, label: &LabelName) -> bool {
        self.labels.contains(label)
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
