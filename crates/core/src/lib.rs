// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! wsc-core: Domain types for the wsclean workspace cleaner

pub mod macros;

pub mod build;
pub mod job;
pub mod name;
pub mod node;
pub mod phase;
pub mod workspace;

#[cfg(any(test, feature = "test-support"))]
pub use build::BuildRecordBuilder;
pub use build::BuildRecord;
pub use job::{Job, JobName, Placement};
pub use node::{LabelName, Node, NodeName, DEFAULT_NODE_LABEL};
pub use phase::{CleanupPhase, PhaseParseError};
pub use workspace::WorkspacePath;
