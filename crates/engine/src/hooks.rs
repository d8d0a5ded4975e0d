// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build lifecycle hooks.
//!
//! The orchestrating service registers hooks at startup; there is no
//! runtime discovery. Before-build hooks run in registration order and
//! after-build hooks in reverse, so a hook's teardown wraps everything
//! registered after it.

use async_trait::async_trait;
use wsc_adapters::HostError;
use wsc_core::{BuildRecord, CleanupPhase};

use crate::log::BuildLog;
use crate::pass::{run_pass, CleanupContext};

/// A task attached to the start and end of every build.
#[async_trait]
pub trait LifecycleHook: Send + Sync {
    /// Human-readable name shown in configuration listings.
    fn display_name(&self) -> &str;

    /// Runs before the build's main work.
    async fn before_build(
        &self,
        _ctx: &CleanupContext<'_>,
        _build: &BuildRecord,
        _log: &dyn BuildLog,
    ) -> Result<(), HostError> {
        Ok(())
    }

    /// Runs after the build's main work, whatever its outcome.
    async fn after_build(
        &self,
        _ctx: &CleanupContext<'_>,
        _build: &BuildRecord,
        _log: &dyn BuildLog,
    ) -> Result<(), HostError> {
        Ok(())
    }
}

/// Cleans the job's workspaces on other nodes, before or after the build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrePostClean {
    phase: CleanupPhase,
}

impl PrePostClean {
    pub const DISPLAY_NAME: &'static str = "Clean up all workspaces of this job in the same slavegroup";

    pub fn new(phase: CleanupPhase) -> Self {
        Self { phase }
    }

    pub fn phase(&self) -> CleanupPhase {
        self.phase
    }
}

#[async_trait]
impl LifecycleHook for PrePostClean {
    fn display_name(&self) -> &str {
        Self::DISPLAY_NAME
    }

    async fn before_build(
        &self,
        ctx: &CleanupContext<'_>,
        build: &BuildRecord,
        log: &dyn BuildLog,
    ) -> Result<(), HostError> {
        if self.phase == CleanupPhase::Before {
            run_pass(ctx, build, log).await?;
        }
        Ok(())
    }

    async fn after_build(
        &self,
        ctx: &CleanupContext<'_>,
        build: &BuildRecord,
        log: &dyn BuildLog,
    ) -> Result<(), HostError> {
        if self.phase == CleanupPhase::After {
            run_pass(ctx, build, log).await?;
        }
        Ok(())
    }
}

/// Ordered list of lifecycle hooks.
#[derive(Default)]
pub struct HookRegistry {
    hooks: Vec<Box<dyn LifecycleHook>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: impl LifecycleHook + 'static) -> &mut Self {
        self.hooks.push(Box::new(hook));
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn display_names(&self) -> Vec<&str> {
        self.hooks.iter().map(|h| h.display_name()).collect()
    }

    pub async fn run_before(
        &self,
        ctx: &CleanupContext<'_>,
        build: &BuildRecord,
        log: &dyn BuildLog,
    ) -> Result<(), HostError> {
        for hook in &self.hooks {
            hook.before_build(ctx, build, log).await?;
        }
        Ok(())
    }

    pub async fn run_after(
        &self,
        ctx: &CleanupContext<'_>,
        build: &BuildRecord,
        log: &dyn BuildLog,
    ) -> Result<(), HostError> {
        for hook in self.hooks.iter().rev() {
            hook.after_build(ctx, build, log).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "hooks_tests.rs"]
mod tests;
