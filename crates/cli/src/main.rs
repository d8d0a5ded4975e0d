// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! wsc: clean a job's stale workspaces on the other nodes of a build fleet

mod commands;
mod config;
mod env;
mod exit_error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{candidates, clean, run};
use crate::exit_error::ExitError;

#[derive(Parser)]
#[command(name = "wsc", version, about = "Clean a job's stale workspaces on other build nodes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show which nodes a cleanup pass would purge
    Candidates(candidates::CandidatesArgs),
    /// Run one cleanup pass now
    Clean(clean::CleanArgs),
    /// Run a command wrapped in the cleanup hooks
    Run(run::RunArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_new(env::log_filter()).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Candidates(args) => candidates::handle(args),
        Command::Clean(args) => clean::handle(args).await,
        Command::Run(args) => {
            let config = config::Config::load(args.config.as_deref())?;
            run::handle(args, &config).await
        }
    }
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = dispatch(cli).await {
        if let Some(exit) = e.downcast_ref::<ExitError>() {
            if !exit.message.is_empty() {
                eprintln!("error: {}", exit.message);
            }
            std::process::exit(exit.code);
        }
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
