// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace deletion transport.
//!
//! The transport only removes files; deciding which workspaces to purge and
//! reporting the outcome belong to the engine.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use wsc_core::WorkspacePath;

/// Errors from deleting a workspace's contents.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("interrupted")]
    Interrupted,
    #[error("channel aborted: {0}")]
    Aborted(String),
}

/// Deletes workspace contents on the node that holds them.
#[async_trait]
pub trait WorkspaceTransport: Send + Sync {
    /// Remove everything beneath `workspace`, keeping the directory itself.
    ///
    /// A workspace directory that does not exist is already clean. Once
    /// `cancel` fires the transport stops at the next entry and returns
    /// [`TransportError::Interrupted`]; no removal is left running when the
    /// returned future completes.
    async fn delete_contents(
        &self,
        workspace: &WorkspacePath,
        cancel: &CancellationToken,
    ) -> Result<(), TransportError>;
}

/// Transport for fleets whose workspace roots are reachable on the local
/// filesystem (single-host fleets, shared mounts).
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTransport;

#[async_trait]
impl WorkspaceTransport for LocalTransport {
    async fn delete_contents(
        &self,
        workspace: &WorkspacePath,
        cancel: &CancellationToken,
    ) -> Result<(), TransportError> {
        let dir = workspace.path().to_path_buf();
        let token = cancel.child_token();
        // Stops the blocking walk if this future is dropped mid-deletion
        let _guard = token.clone().drop_guard();

        let removed = tokio::task::spawn_blocking(move || delete_dir_contents(&dir, &token))
            .await
            .map_err(|e| TransportError::Io(io::Error::other(e)))??;

        tracing::debug!(
            node = %workspace.node.display_label(),
            path = %workspace.path.display(),
            removed,
            "deleted workspace contents"
        );
        Ok(())
    }
}

/// Remove every entry in `dir`. Returns the number of top-level entries removed.
fn delete_dir_contents(dir: &Path, cancel: &CancellationToken) -> Result<usize, TransportError> {
    if cancel.is_cancelled() {
        return Err(TransportError::Interrupted);
    }
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e.into()),
    };

    let mut removed = 0;
    for entry in entries {
        let entry = entry?;
        remove_entry(entry.path(), entry.file_type()?, cancel)?;
        removed += 1;
    }
    Ok(removed)
}

/// Depth-first removal that checks `cancel` before every entry.
fn remove_entry(
    path: PathBuf,
    file_type: fs::FileType,
    cancel: &CancellationToken,
) -> Result<(), TransportError> {
    if cancel.is_cancelled() {
        return Err(TransportError::Interrupted);
    }
    // Symlinks are unlinked, never followed
    if file_type.is_dir() {
        for entry in fs::read_dir(&path)? {
            let entry = entry?;
            remove_entry(entry.path(), entry.file_type()?, cancel)?;
        }
        fs::remove_dir(&path)?;
    } else {
        fs::remove_file(&path)?;
    }
    Ok(())
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{TransportError, WorkspaceTransport};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::{HashMap, HashSet};
    use std::io;
    use std::sync::Arc;
    use tokio_util::sync::CancellationToken;
    use wsc_core::{NodeName, WorkspacePath};

    /// Failure to return for a node's deletion.
    #[derive(Debug, Clone)]
    pub enum InjectedFailure {
        Io(io::ErrorKind, String),
        Interrupted,
        Aborted(String),
    }

    impl InjectedFailure {
        fn to_error(&self) -> TransportError {
            match self {
                Self::Io(kind, msg) => TransportError::Io(io::Error::new(*kind, msg.clone())),
                Self::Interrupted => TransportError::Interrupted,
                Self::Aborted(msg) => TransportError::Aborted(msg.clone()),
            }
        }
    }

    #[derive(Default)]
    struct FakeTransportState {
        calls: Vec<WorkspacePath>,
        failures: HashMap<NodeName, InjectedFailure>,
        stalled: HashSet<NodeName>,
        in_flight: usize,
    }

    /// Fake transport that records deletions and fails on request.
    #[derive(Clone, Default)]
    pub struct FakeTransport {
        inner: Arc<Mutex<FakeTransportState>>,
    }

    impl FakeTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make every deletion on `node` fail with `failure`.
        pub fn fail_on(&self, node: impl Into<NodeName>, failure: InjectedFailure) {
            self.inner.lock().failures.insert(node.into(), failure);
        }

        /// Make deletions on `node` hang until they are cancelled.
        pub fn stall_on(&self, node: impl Into<NodeName>) {
            self.inner.lock().stalled.insert(node.into());
        }

        /// Number of deletions currently running.
        pub fn in_flight(&self) -> usize {
            self.inner.lock().in_flight
        }

        /// Every deletion attempted, in order, including failed ones.
        pub fn calls(&self) -> Vec<WorkspacePath> {
            self.inner.lock().calls.clone()
        }

        /// Names of nodes a deletion was attempted on, in order.
        pub fn nodes(&self) -> Vec<String> {
            self.inner.lock().calls.iter().map(|ws| ws.node.to_string()).collect()
        }
    }

    #[async_trait]
    impl WorkspaceTransport for FakeTransport {
        async fn delete_contents(
            &self,
            workspace: &WorkspacePath,
            cancel: &CancellationToken,
        ) -> Result<(), TransportError> {
            if cancel.is_cancelled() {
                return Err(TransportError::Interrupted);
            }
            {
                let mut inner = self.inner.lock();
                inner.calls.push(workspace.clone());
                if let Some(failure) = inner.failures.get(&workspace.node) {
                    return Err(failure.to_error());
                }
                if !inner.stalled.contains(&workspace.node) {
                    return Ok(());
                }
                inner.in_flight += 1;
            }
            cancel.cancelled().await;
            self.inner.lock().in_flight -= 1;
            Err(TransportError::Interrupted)
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeTransport, InjectedFailure};

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
