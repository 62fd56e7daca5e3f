// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering for analysis results.
//!
//! Formats an [`AnalysisView`] as text, JSON, or Markdown. The text
//! formatter colors risk buckets; the others ignore the color stream.

mod json;
mod markdown;
mod text;

use termcolor::WriteColor;

use crate::cli::OutputFormat;
use crate::ingest::DataQualityIssue;
use crate::record::FlakyTestRecord;
use crate::registry::{RiskSummary, SortKey};

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Everything a formatter needs to render one analysis.
///
/// `ranked` is the filtered, sorted view; `summary` always covers the
/// full unfiltered snapshot; `top` is the head of `ranked` chosen for
/// fix-suggestion cards.
pub struct AnalysisView<'a> {
    pub summary: RiskSummary,
    pub sort: SortKey,
    pub ranked: Vec<&'a FlakyTestRecord>,
    pub top: Vec<&'a FlakyTestRecord>,
    pub issues: &'a [DataQualityIssue],
    /// Display threshold: scores at or above render as high risk.
    pub score_high: i64,
    /// Display threshold: scores at or above render as medium risk.
    pub score_medium: i64,
}

/// Trait for rendering an analysis view into an output format.
pub trait ReportFormatter {
    /// Write the rendered view. An empty snapshot must still produce
    /// valid output for the format (a notice for text, a zero-count
    /// document for JSON).
    fn format_to(&self, writer: &mut dyn WriteColor, view: &AnalysisView) -> anyhow::Result<()>;
}

/// Render `view` in the requested format.
pub fn write_report(
    writer: &mut dyn WriteColor,
    format: OutputFormat,
    view: &AnalysisView,
) -> anyhow::Result<()> {
    let formatter: Box<dyn ReportFormatter> = match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
    };
    formatter.format_to(writer, view)
}
