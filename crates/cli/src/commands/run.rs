// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `wsc run` - run a build command between the cleanup hooks

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use wsc_adapters::LocalTransport;
use wsc_core::CleanupPhase;
use wsc_engine::{CleanupContext, HookRegistry, PrePostClean, WriterLog};

use super::{interrupt_on_ctrl_c, BuildArgs};
use crate::config::Config;
use crate::exit_error::ExitError;

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub target: BuildArgs,

    /// When to clean: before or after the command (overrides config)
    #[arg(long)]
    pub phase: Option<CleanupPhase>,

    /// Config file (default: $WSC_CONFIG or ~/.config/wsc/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Build command and its arguments
    #[arg(last = true, required = true)]
    pub command: Vec<String>,
}

pub async fn handle(args: RunArgs, config: &Config) -> Result<()> {
    let (fleet, build) = args.target.load()?;
    let phase = args.phase.unwrap_or(config.phase);

    let mut hooks = HookRegistry::new();
    hooks.register(PrePostClean::new(phase));

    let ctx = CleanupContext::new(&fleet, &LocalTransport);
    interrupt_on_ctrl_c(ctx.interrupt.clone());
    let log = WriterLog::new(std::io::stdout());

    tracing::info!(job = %build.job, build = build.number, %phase, "running build");
    hooks.run_before(&ctx, &build, &log).await?;

    let (program, rest) = args.command.split_first().context("missing build command")?;
    let status = tokio::process::Command::new(program).args(rest).status().await;

    // After-build hooks run whatever the outcome, even when the command never started
    hooks.run_after(&ctx, &build, &log).await?;

    let status = status.with_context(|| format!("failed to start '{}'", program))?;
    if !status.success() {
        let code = status.code().unwrap_or(1);
        return Err(ExitError::new(code, String::new()).into());
    }
    Ok(())
}
