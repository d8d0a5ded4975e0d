// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::log::MemoryLog;
use std::fs;
use std::io;
use std::time::Duration;
use tempfile::TempDir;
use wsc_adapters::{FakeTransport, InjectedFailure, LocalTransport};
use wsc_core::WorkspacePath;

fn candidate(node: &str) -> Candidate {
    Candidate {
        node: node.into(),
        workspace: Some(WorkspacePath::new(node, format!("/ws/{}/app", node))),
    }
}

#[tokio::test]
async fn purge_success_logs_only_cleaning_line() {
    let transport = FakeTransport::new();
    let log = MemoryLog::new();

    let outcome = purge(&transport, &Interrupt::new(), &candidate("node1"), &log).await;

    assert_eq!(outcome, PurgeOutcome::Cleaned);
    assert_eq!(log.lines(), vec!["cleaning on node1"]);
    assert_eq!(transport.calls(), vec![WorkspacePath::new("node1", "/ws/node1/app")]);
}

#[tokio::test]
async fn purge_missing_workspace_is_informational() {
    let transport = FakeTransport::new();
    let log = MemoryLog::new();
    let offline = Candidate { node: "node3".into(), workspace: None };

    let outcome = purge(&transport, &Interrupt::new(), &offline, &log).await;

    assert_eq!(outcome, PurgeOutcome::Missing);
    assert!(!outcome.is_failed());
    assert_eq!(
        log.lines(),
        vec!["cleaning on node3", "no workspace found on node3; node is maybe offline"]
    );
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn purge_default_node_uses_master_label() {
    let log = MemoryLog::new();
    let offline = Candidate { node: "".into(), workspace: None };

    purge(&FakeTransport::new(), &Interrupt::new(), &offline, &log).await;

    assert_eq!(
        log.lines(),
        vec!["cleaning on master", "no workspace found on master; node is maybe offline"]
    );
}

#[yare::parameterized(
    io          = { InjectedFailure::Io(io::ErrorKind::PermissionDenied, "Permission denied".into()), "can't delete on node1: Permission denied" },
    interrupted = { InjectedFailure::Interrupted,                                                      "can't delete on node1: interrupted" },
    aborted     = { InjectedFailure::Aborted("remote call cancelled".into()),                          "can't delete on node1: channel aborted: remote call cancelled" },
)]
#[test_macro(tokio::test)]
async fn purge_failure_is_reported_not_raised(failure: InjectedFailure, line: &str) {
    let transport = FakeTransport::new();
    transport.fail_on("node1", failure);
    let log = MemoryLog::new();

    let outcome = purge(&transport, &Interrupt::new(), &candidate("node1"), &log).await;

    assert!(outcome.is_failed());
    assert_eq!(log.lines(), vec!["cleaning on node1", line]);
}

#[tokio::test]
async fn pending_interrupt_abandons_one_deletion() {
    let transport = FakeTransport::new();
    let interrupt = Interrupt::new();
    let log = MemoryLog::new();
    interrupt.interrupt();

    let first = purge(&transport, &interrupt, &candidate("node1"), &log).await;
    let second = purge(&transport, &interrupt, &candidate("node2"), &log).await;

    assert_eq!(first, PurgeOutcome::Failed("interrupted".to_string()));
    assert_eq!(second, PurgeOutcome::Cleaned);
    assert_eq!(transport.nodes(), vec!["node2"]);
    assert!(log.contains("can't delete on node1: interrupted"));
}

#[tokio::test]
async fn interrupt_during_deletion_waits_for_it_to_stop() {
    let transport = FakeTransport::new();
    transport.stall_on("node1");
    let interrupt = Interrupt::new();
    let log = MemoryLog::new();

    let target = candidate("node1");
    let (first, ()) = tokio::join!(purge(&transport, &interrupt, &target, &log), async {
        while transport.in_flight() == 0 {
            tokio::task::yield_now().await;
        }
        interrupt.interrupt();
    });

    assert_eq!(first, PurgeOutcome::Failed("interrupted".to_string()));
    assert_eq!(transport.in_flight(), 0);
    assert_eq!(log.lines(), vec!["cleaning on node1", "can't delete on node1: interrupted"]);

    let second = purge(&transport, &interrupt, &candidate("node2"), &log).await;
    assert_eq!(second, PurgeOutcome::Cleaned);
    assert_eq!(transport.nodes(), vec!["node1", "node2"]);
}

#[tokio::test]
async fn interrupted_local_deletion_is_stopped_on_return() {
    let tmp = TempDir::new().unwrap();
    let ws_dir = tmp.path().join("node1/app");
    for d in 0..50 {
        let dir = ws_dir.join(format!("d{}", d));
        fs::create_dir_all(&dir).unwrap();
        for f in 0..50 {
            fs::write(dir.join(format!("f{}", f)), b"x").unwrap();
        }
    }
    let interrupt = Interrupt::new();
    let workspace = Some(WorkspacePath::new("node1", &ws_dir));
    let local = Candidate { node: "node1".into(), workspace };
    let log = MemoryLog::new();

    let (outcome, ()) = tokio::join!(purge(&LocalTransport, &interrupt, &local, &log), async {
        tokio::time::sleep(Duration::from_millis(1)).await;
        interrupt.interrupt();
    });

    let remaining = count_files(&ws_dir);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(count_files(&ws_dir), remaining);
    if outcome.is_failed() {
        assert!(log.contains("can't delete on node1: interrupted"));
    }
}

fn count_files(dir: &std::path::Path) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| fs::read_dir(entry.unwrap().path()).unwrap().count() + 1)
        .sum()
}
