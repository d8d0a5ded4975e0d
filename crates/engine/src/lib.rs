// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! wsc-engine: resolves which remote workspaces a build should purge and
//! purges them one node at a time.

pub mod hooks;
pub mod interrupt;
pub mod log;
pub mod pass;
pub mod purger;
pub mod report;
pub mod resolver;

#[cfg(test)]
mod test_helpers;

pub use hooks::{HookRegistry, LifecycleHook, PrePostClean};
pub use interrupt::Interrupt;
pub use log::{BuildLog, MemoryLog, WriterLog};
pub use pass::{run_pass, CleanupContext, PassSummary};
pub use purger::{purge, PurgeOutcome};
pub use resolver::{resolve_candidates, Candidate, History};
