// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `wsc candidates` - show the nodes a pass would purge

use anyhow::Result;
use clap::Args;
use wsc_engine::{resolve_candidates, WriterLog};

use super::BuildArgs;
use crate::output::{format_candidates, CandidateRow, OutputFormat};

#[derive(Args)]
pub struct CandidatesArgs {
    #[command(flatten)]
    pub target: BuildArgs,

    #[arg(long = "output", short = 'o', value_enum, default_value_t)]
    pub output: OutputFormat,
}

pub fn handle(args: CandidatesArgs) -> Result<()> {
    let (fleet, build) = args.target.load()?;
    // Resolver notes go to stderr so stdout stays machine-readable
    let log = WriterLog::new(std::io::stderr());
    let candidates = resolve_candidates(&fleet, &build, &log)?;

    let rows: Vec<CandidateRow> = candidates.iter().map(CandidateRow::from).collect();
    let out = format_candidates(&rows, args.output)?;
    if !out.is_empty() {
        println!("{}", out);
    }
    Ok(())
}
