// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Markdown format report output, suitable for PR comments.


use termcolor::WriteColor;

use super::{AnalysisView, ReportFormatter};

/// Markdown format report formatter.
pub struct MarkdownFormatter;

impl ReportFormatter for MarkdownFormatter {
    fn format_to(&self, writer: &mut dyn WriteColor, view: &AnalysisView) -> anyhow::Result<()> {
        writeln!(writer, "# Flaky Test Analysis")?;
        writeln!(writer)?;
        writeln!(writer, "| Risk | Count |")?;
        writeln!(writer, "|------|-------|")?;
        writeln!(writer, "| High | {} |", view.summary.high)?;
        writeln!(writer, "| Medium | {} |", view.summary.medium)?;
        writeln!(writer, "| Low | {} |", view.summary.low)?;
        writeln!(writer, "| **Total** | {} |", view.summary.total)?;

        if view.summary.total == 0 {
            writeln!(writer)?;
            writeln!(writer, "No flaky tests in snapshot.")?;
            return Ok(());
        }

        writeln!(writer)?;
        writeln!(
            writer,
            "## Ranked by {} ({} of {} shown)",
            view.sort.label(),
            view.ranked.len(),
            view.summary.total
        )?;
        writeln!(writer)?;
        writeln!(
            writer,
            "| Test | Risk | Score | Failure rate | Runs | Status | Priority | Project | Last failure |"
        )?;
        writeln!(
            writer,
            "|------|------|-------|--------------|------|--------|----------|---------|--------------|"
        )?;
        for record in &view.ranked {
            writeln!(
                writer,
                "| {} | {} | {} | {}% | {} | {} | {} | {} | {} |",
                escape_cell(&record.test_name),
                record.category.label(),
                record.display_score(),
                record.display_failure_rate(),
                record.total_runs,
                record.status.label(),
                record.priority.label(),
                escape_cell(&record.project_name),
                record.last_failure.format("%Y-%m-%d %H:%M"),
            )?;
        }

        if !view.top.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "## Fix suggestions")?;
            for (rank, record) in view.top.iter().enumerate() {
                writeln!(writer)?;
                writeln!(
                    writer,
                    "### {}. {} ({} risk)",
                    rank + 1,
                    escape_cell(&record.test_name),
                    record.category.label()
                )?;
                writeln!(writer)?;
                for fix in &record.suggested_fixes {
                    writeln!(writer, "- {fix}")?;
                }
            }
        }

        Ok(())
    }
}

/// Pipes would break table cells.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
