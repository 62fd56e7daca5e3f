// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Analyze command implementation.

use anyhow::Context;
use termcolor::StandardStream;

use unflake::cli::{AnalyzeArgs, Cli};
use unflake::config::{self, Config};
use unflake::discovery;
use unflake::ingest::Snapshot;
use unflake::registry;
use unflake::report::{self, AnalysisView};

/// Run the analyze command.
pub fn run(cli: &Cli, args: &AnalyzeArgs) -> anyhow::Result<()> {
    let config = load_config(cli)?;

    let snapshot = Snapshot::load(&args.snapshot)
        .with_context(|| format!("failed to load snapshot {}", args.snapshot.display()))?;

    // Summary always covers the full snapshot; filters only narrow the
    // ranked table below it.
    let summary = registry::summarize(&snapshot.records);
    let sort = args
        .sort
        .map(registry::SortKey::from)
        .unwrap_or_else(|| config.analysis.sort.into());
    let filtered = registry::filter(&snapshot.records, &args.record_filter());
    let ranked = registry::sort_by(&filtered, sort);
    let top_n = args.top.unwrap_or(config.analysis.top_fixes);
    let top = registry::top_suggestions(&ranked, top_n).to_vec();

    let view = AnalysisView {
        summary,
        sort,
        ranked,
        top,
        issues: &snapshot.issues,
        score_high: config.analysis.score_high,
        score_medium: config.analysis.score_medium,
    };

    let stdout = StandardStream::stdout(args.color_mode().stdout_choice());
    let mut writer = stdout.lock();
    report::write_report(&mut writer, args.output, &view)
}

/// Load config from the explicit flag or by discovery, else defaults.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    if let Some(path) = &cli.config {
        return config::load_with_warnings(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }
    let cwd = std::env::current_dir()?;
    match discovery::find_config(&cwd) {
        Some(path) => config::load_with_warnings(&path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(Config::default()),
    }
}
