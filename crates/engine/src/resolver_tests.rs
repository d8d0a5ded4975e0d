// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::log::MemoryLog;
use crate::test_helpers::{labelled_fleet, roaming_fleet};
use proptest::prelude::*;
use wsc_adapters::FleetSnapshot;
use wsc_core::Node;

fn nodes(candidates: &[Candidate]) -> Vec<&str> {
    candidates.iter().map(|c| c.node.as_str()).collect()
}

#[test]
fn location_stable_excludes_run_node() {
    let fleet = labelled_fleet();
    let log = MemoryLog::new();
    let build = BuildRecord::new("J", 15, "node2");

    let candidates = resolve_candidates(&fleet, &build, &log).unwrap();

    assert_eq!(nodes(&candidates), vec!["node1", "node3"]);
    assert_eq!(candidates[0].workspace, Some(WorkspacePath::new("node1", "/ws/node1/J")));
    assert_eq!(candidates[1].workspace, Some(WorkspacePath::new("node3", "/ws/node3/J")));
    assert!(log.lines().is_empty());
}

#[test]
fn location_stable_run_on_node_outside_label_purges_all_members() {
    let fleet = labelled_fleet();
    let build = BuildRecord::new("J", 2, "other");
    let candidates = resolve_candidates(&fleet, &build, &MemoryLog::new()).unwrap();
    assert_eq!(nodes(&candidates), vec!["node1", "node2", "node3"]);
}

#[test]
fn location_stable_without_label_skips() {
    let fleet = labelled_fleet().with_job(Job::location_stable("free", None));
    let log = MemoryLog::new();

    let candidates = resolve_candidates(&fleet, &BuildRecord::new("free", 1, "node1"), &log).unwrap();

    assert!(candidates.is_empty());
    assert_eq!(log.lines(), vec!["skipping roaming project."]);
}

#[test]
fn label_without_members_yields_nothing() {
    let fleet = labelled_fleet().with_job(Job::location_stable("lonely", Some("empty".into())));
    let log = MemoryLog::new();

    let candidates = resolve_candidates(&fleet, &BuildRecord::new("lonely", 1, "node1"), &log).unwrap();

    assert!(candidates.is_empty());
    assert!(log.lines().is_empty());
}

#[test]
fn offline_member_is_a_candidate_without_workspace() {
    let fleet = labelled_fleet().with_offline_node(Node::new("node4").with_label("L"));
    let candidates =
        resolve_candidates(&fleet, &BuildRecord::new("J", 3, "node1"), &MemoryLog::new()).unwrap();

    assert_eq!(nodes(&candidates), vec!["node2", "node3", "node4"]);
    assert!(candidates[2].workspace.is_none());
}

#[test]
fn default_node_member_is_labelled_master() {
    let fleet = FleetSnapshot::new()
        .with_node(Node::new("").with_label("L"), "/ws/master")
        .with_node(Node::new("node1").with_label("L"), "/ws/node1")
        .with_job(Job::location_stable("J", Some("L".into())));

    let candidates =
        resolve_candidates(&fleet, &BuildRecord::new("J", 1, "node1"), &MemoryLog::new()).unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].label(), "master");
    assert_eq!(candidates[0].workspace, Some(WorkspacePath::new("", "/ws/master/J")));
}

#[test]
fn build_on_default_node_excludes_default_node() {
    let fleet = FleetSnapshot::new()
        .with_node(Node::new("").with_label("L"), "/ws/master")
        .with_node(Node::new("node1").with_label("L"), "/ws/node1")
        .with_job(Job::location_stable("J", Some("L".into())));

    let candidates =
        resolve_candidates(&fleet, &BuildRecord::new("J", 1, ""), &MemoryLog::new()).unwrap();
    assert_eq!(nodes(&candidates), vec!["node1"]);
}

#[test]
fn roaming_history_dedups_in_first_seen_order() {
    // Oldest first: A, B, A, C; current build runs on D.
    let fleet = roaming_fleet(&["A", "B", "A", "C"]).with_node(Node::new("D"), "/ws/D");
    let build = BuildRecord::new("K", 5, "D");

    let candidates = resolve_candidates(&fleet, &build, &MemoryLog::new()).unwrap();

    assert_eq!(nodes(&candidates), vec!["C", "A", "B"]);
}

#[test]
fn roaming_uses_most_recent_recorded_workspace() {
    let fleet = roaming_fleet(&["A", "B", "A"]);
    let candidates =
        resolve_candidates(&fleet, &BuildRecord::new("K", 4, "B"), &MemoryLog::new()).unwrap();

    assert_eq!(candidates, vec![Candidate {
        node: "A".into(),
        workspace: Some(WorkspacePath::new("A", "/ws/A/K@3")),
    }]);
}

#[test]
fn roaming_scenario_k10_on_z() {
    // K7 on x, K8 on x, K9 on y; K10 runs on z.
    let mut fleet = FleetSnapshot::new()
        .with_job(Job::roaming("K"))
        .with_node(Node::new("x"), "/ws/x")
        .with_node(Node::new("y"), "/ws/y")
        .with_node(Node::new("z"), "/ws/z");
    for (number, node) in [(7, "x"), (8, "x"), (9, "y")] {
        fleet = fleet.with_build(
            BuildRecord::new("K", number, node)
                .with_workspace(WorkspacePath::new(node, format!("/ws/{}/K@{}", node, number))),
        );
    }

    let candidates =
        resolve_candidates(&fleet, &BuildRecord::new("K", 10, "z"), &MemoryLog::new()).unwrap();

    assert_eq!(nodes(&candidates), vec!["y", "x"]);
    assert_eq!(candidates[1].workspace, Some(WorkspacePath::new("x", "/ws/x/K@8")));
}

#[test]
fn roaming_single_build_history_yields_nothing() {
    let fleet = roaming_fleet(&["A"]);
    let candidates =
        resolve_candidates(&fleet, &BuildRecord::new("K", 1, "A"), &MemoryLog::new()).unwrap();
    assert!(candidates.is_empty());
}

#[test]
fn roaming_first_ever_build_yields_nothing() {
    let fleet = FleetSnapshot::new().with_job(Job::roaming("K"));
    let candidates =
        resolve_candidates(&fleet, &BuildRecord::new("K", 1, "A"), &MemoryLog::new()).unwrap();
    assert!(candidates.is_empty());
}

#[test]
fn roaming_never_includes_run_node() {
    let fleet = roaming_fleet(&["A", "A", "A"]);
    let candidates =
        resolve_candidates(&fleet, &BuildRecord::new("K", 4, "A"), &MemoryLog::new()).unwrap();
    assert!(candidates.is_empty());
}

#[test]
fn roaming_offline_node_has_no_workspace() {
    let fleet = FleetSnapshot::new()
        .with_job(Job::roaming("K"))
        .with_offline_node(Node::new("gone"))
        .with_build(
            BuildRecord::new("K", 1, "gone").with_workspace(WorkspacePath::new("gone", "/ws/gone/K")),
        );

    let candidates =
        resolve_candidates(&fleet, &BuildRecord::new("K", 2, ""), &MemoryLog::new()).unwrap();
    assert_eq!(candidates, vec![Candidate { node: "gone".into(), workspace: None }]);
}

#[test]
fn broken_history_propagates() {
    let fleet = FleetSnapshot::new()
        .with_job(Job::roaming("K"))
        .with_build(BuildRecord::new("K", 1, "retired"));

    let err = resolve_candidates(&fleet, &BuildRecord::new("K", 2, ""), &MemoryLog::new()).unwrap_err();
    assert!(matches!(err, HostError::BrokenHistory { .. }));
}

#[test]
fn unknown_job_propagates() {
    let err = resolve_candidates(&labelled_fleet(), &BuildRecord::new("nope", 1, ""), &MemoryLog::new())
        .unwrap_err();
    assert!(matches!(err, HostError::UnknownJob(_)));
}

/// Host whose history points forward, as a corrupted chain would.
struct CyclicHost;

impl BuildHost for CyclicHost {
    fn job(&self, build: &BuildRecord) -> Result<Job, HostError> {
        Ok(Job::roaming(build.job.clone()))
    }

    fn label_members(&self, _label: &LabelName) -> Option<Vec<wsc_core::Node>> {
        None
    }

    fn workspace_for(&self, _node: &wsc_core::Node, _job: &Job) -> Option<WorkspacePath> {
        None
    }

    fn previous_build(&self, build: &BuildRecord) -> Result<Option<BuildRecord>, HostError> {
        Ok(Some(BuildRecord::new(build.job.clone(), build.number, "loop")))
    }
}

#[test]
fn cyclic_history_terminates_with_error() {
    let err = resolve_candidates(&CyclicHost, &BuildRecord::new("K", 3, ""), &MemoryLog::new()).unwrap_err();
    assert_eq!(err.to_string(), "broken build history for K#3: predecessor #3 is not older");
}

#[test]
fn history_is_restartable() {
    let fleet = roaming_fleet(&["A", "B"]);
    let build = BuildRecord::new("K", 3, "C");

    let first: Vec<u64> = History::new(&fleet, &build).map(|b| b.unwrap().number).collect();
    let second: Vec<u64> = History::new(&fleet, &build).map(|b| b.unwrap().number).collect();
    assert_eq!(first, vec![2, 1]);
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn label_candidates_are_members_minus_run_node(
        members in proptest::sample::subsequence(vec!["n0", "n1", "n2", "n3", "n4", "n5"], 0..=6)
            .prop_shuffle(),
        run in 0usize..7,
    ) {
        let mut fleet = FleetSnapshot::new().with_job(Job::location_stable("J", Some("L".into())));
        for name in &members {
            fleet = fleet.with_node(Node::new(*name).with_label("L"), format!("/ws/{}", name));
        }
        let run_node = format!("n{}", run);
        let build = BuildRecord::new("J", 1, run_node.as_str());

        let candidates = resolve_candidates(&fleet, &build, &MemoryLog::new()).unwrap();

        let mut got: Vec<&str> = candidates.iter().map(|c| c.node.as_str()).collect();
        got.sort_unstable();
        let mut want: Vec<&str> = members.iter().copied().filter(|m| *m != run_node).collect();
        want.sort_unstable();
        prop_assert_eq!(got, want);
    }
}
