// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod candidates;
pub mod clean;
pub mod run;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use wsc_adapters::FleetSnapshot;
use wsc_core::{BuildRecord, JobName, NodeName};
use wsc_engine::Interrupt;

/// Identifies the fleet and the build a pass runs for.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Fleet description (nodes, jobs, build history)
    #[arg(long)]
    pub fleet: PathBuf,

    /// Job name
    #[arg(long)]
    pub job: String,

    /// Build number
    #[arg(long)]
    pub build: u64,

    /// Node the build runs on, for a build not yet in the fleet history
    /// (use "" for the default node)
    #[arg(long)]
    pub node: Option<String>,
}

impl BuildArgs {
    /// Load the fleet and the build record the pass runs for.
    pub fn load(&self) -> Result<(FleetSnapshot, BuildRecord)> {
        let fleet = FleetSnapshot::load(&self.fleet)?;
        let job = JobName::from(self.job.as_str());
        let build = match &self.node {
            Some(node) => BuildRecord::new(job, self.build, NodeName::from(node.as_str())),
            None => fleet
                .build(&job, self.build)
                .with_context(|| "pass --node for a build that is not in the fleet history")?,
        };
        Ok((fleet, build))
    }
}

/// Raise `interrupt` on every Ctrl-C, abandoning the deletion in flight.
pub(crate) fn interrupt_on_ctrl_c(interrupt: Interrupt) {
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupted, abandoning current deletion");
            interrupt.interrupt();
        }
    });
}
