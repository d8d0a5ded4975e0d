// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for engine tests.

use wsc_adapters::FleetSnapshot;
use wsc_core::{BuildRecord, Job, Node, WorkspacePath};

/// Location-stable job `J` on label `L = {node1, node2, node3}`.
pub(crate) fn labelled_fleet() -> FleetSnapshot {
    FleetSnapshot::new()
        .with_node(Node::new("node1").with_label("L"), "/ws/node1")
        .with_node(Node::new("node2").with_label("L"), "/ws/node2")
        .with_node(Node::new("node3").with_label("L"), "/ws/node3")
        .with_node(Node::new("other").with_label("M"), "/ws/other")
        .with_job(Job::location_stable("J", Some("L".into())))
}

/// Roaming job `K` with builds on the given nodes, numbered from 1 (oldest first).
pub(crate) fn roaming_fleet(history: &[&str]) -> FleetSnapshot {
    let mut fleet = FleetSnapshot::new().with_job(Job::roaming("K"));
    let mut nodes: Vec<&str> = history.to_vec();
    nodes.sort_unstable();
    nodes.dedup();
    for node in nodes {
        fleet = fleet.with_node(Node::new(node), format!("/ws/{}", node));
    }
    for (i, node) in history.iter().enumerate() {
        let number = i as u64 + 1;
        fleet = fleet.with_build(
            BuildRecord::builder()
                .job("K")
                .number(number)
                .built_on(*node)
                .workspace(WorkspacePath::new(*node, format!("/ws/{}/K@{}", node, number)))
                .build(),
        );
    }
    fleet
}
