// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Binary entry point: parse arguments, set up logging, dispatch.

mod cmd_analyze;
mod cmd_projects;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use unflake::cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    match &cli.command {
        Command::Analyze(args) => cmd_analyze::run(&cli, args),
        Command::Projects(args) => cmd_projects::run(&cli, args),
    }
}

/// Data-quality warnings go to stderr; `UNFLAKE_LOG` overrides the level.
fn init_tracing(cli: &Cli) {
    let default = match &cli.command {
        Command::Analyze(args) if args.verbose => "unflake=debug",
        _ => "unflake=warn",
    };
    let filter = EnvFilter::try_from_env("UNFLAKE_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
