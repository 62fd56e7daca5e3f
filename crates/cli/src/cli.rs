// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;
use crate::record::{Category, Status};
use crate::registry::{RecordFilter, SortKey};

/// A flaky-test triage tool that ranks and filters unstable tests
#[derive(Parser)]
#[command(name = "unflake")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "UNFLAKE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rank flaky tests and show risk summary and fix suggestions
    Analyze(AnalyzeArgs),
    /// List the projects that own flaky tests
    Projects(ProjectsArgs),
}

#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Snapshot file (JSON array of flaky-test records)
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Sort key for the ranking
    #[arg(short, long, value_name = "KEY")]
    pub sort: Option<SortArg>,

    /// Only show tests in this risk bucket
    #[arg(long, default_value = "all")]
    pub category: CategoryFilter,

    /// Only show tests owned by this project id ("all" for every project)
    #[arg(long, value_name = "PROJECT_ID")]
    pub project: Option<String>,

    /// Only show tests with this status
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,

    /// How many top-ranked tests get fix-suggestion cards
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl AnalyzeArgs {
    /// Build the record filter from the flag values.
    pub fn record_filter(&self) -> RecordFilter {
        let project_id = self
            .project
            .as_deref()
            .filter(|p| !p.eq_ignore_ascii_case("all"))
            .map(ToString::to_string);
        RecordFilter {
            category: self.category.into(),
            project_id,
            status: self.status.into(),
        }
    }

    /// Effective color mode after --no-color.
    pub fn color_mode(&self) -> ColorMode {
        if self.no_color { ColorMode::Never } else { self.color }
    }
}

#[derive(clap::Args)]
pub struct ProjectsArgs {
    /// Snapshot file (JSON array of flaky-test records)
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

/// Clap-facing sort key choice, mapped onto the registry's key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortArg {
    #[default]
    Score,
    FailureRate,
    Runs,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Score => SortKey::InstabilityScore,
            SortArg::FailureRate => SortKey::FailureRate,
            SortArg::Runs => SortKey::TotalRuns,
        }
    }
}

/// Risk-bucket filter choice; "all" matches every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CategoryFilter {
    #[default]
    All,
    High,
    Medium,
    Low,
}

impl From<CategoryFilter> for Option<Category> {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => None,
            CategoryFilter::High => Some(Category::High),
            CategoryFilter::Medium => Some(Category::Medium),
            CategoryFilter::Low => Some(Category::Low),
        }
    }
}

/// Status filter choice; "all" matches every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Open,
    InProgress,
    Resolved,
    Ignored,
}

impl From<StatusFilter> for Option<Status> {
    fn from(filter: StatusFilter) -> Self {
        match filter {
            StatusFilter::All => None,
            StatusFilter::Open => Some(Status::Open),
            StatusFilter::InProgress => Some(Status::InProgress),
            StatusFilter::Resolved => Some(Status::Resolved),
            StatusFilter::Ignored => Some(Status::Ignored),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
