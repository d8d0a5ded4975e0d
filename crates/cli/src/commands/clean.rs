// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `wsc clean` - run one cleanup pass now

use anyhow::Result;
use clap::Args;
use wsc_adapters::LocalTransport;
use wsc_engine::{run_pass, CleanupContext, WriterLog};

use super::{interrupt_on_ctrl_c, BuildArgs};
use crate::exit_error::ExitError;

#[derive(Args)]
pub struct CleanArgs {
    #[command(flatten)]
    pub target: BuildArgs,

    /// Exit nonzero if any deletion failed
    #[arg(long)]
    pub strict: bool,
}

pub async fn handle(args: CleanArgs) -> Result<()> {
    let (fleet, build) = args.target.load()?;
    let ctx = CleanupContext::new(&fleet, &LocalTransport);
    interrupt_on_ctrl_c(ctx.interrupt.clone());

    let log = WriterLog::new(std::io::stdout());
    let summary = run_pass(&ctx, &build, &log).await?;

    if args.strict && summary.failed > 0 {
        return Err(ExitError::new(
            1,
            format!("{} of {} workspace deletion(s) failed", summary.failed, summary.candidates),
        )
        .into());
    }
    Ok(())
}
