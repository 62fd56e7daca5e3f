// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.


use termcolor::{Color, ColorSpec, WriteColor};

use crate::record::{Category, FlakyTestRecord, Status};

use super::{AnalysisView, ReportFormatter};

/// Text format report formatter.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format_to(&self, writer: &mut dyn WriteColor, view: &AnalysisView) -> anyhow::Result<()> {
        writeln!(writer, "Flaky Test Analysis")?;
        writeln!(writer, "===================")?;
        write_summary(writer, view)?;

        if view.summary.total == 0 {
            writeln!(writer)?;
            writeln!(writer, "No flaky tests in snapshot.")?;
            return Ok(());
        }

        writeln!(writer)?;
        writeln!(
            writer,
            "Ranked by {} ({} of {} shown)",
            view.sort.label(),
            view.ranked.len(),
            view.summary.total
        )?;
        writeln!(writer)?;
        for record in &view.ranked {
            write_record(writer, record, view)?;
        }

        if !view.top.is_empty() {
            writeln!(writer, "Fix suggestions")?;
            writeln!(writer, "---------------")?;
            for (rank, record) in view.top.iter().enumerate() {
                write!(writer, "{}. {} (", rank + 1, record.test_name)?;
                write_category(writer, record.category)?;
                writeln!(writer, " risk)")?;
                for fix in &record.suggested_fixes {
                    writeln!(writer, "   - {fix}")?;
                }
            }
        }

        Ok(())
    }
}

fn write_summary(writer: &mut dyn WriteColor, view: &AnalysisView) -> anyhow::Result<()> {
    writeln!(writer, "High risk:    {}", view.summary.high)?;
    writeln!(writer, "Medium risk:  {}", view.summary.medium)?;
    writeln!(writer, "Low risk:     {}", view.summary.low)?;
    writeln!(writer, "Total tests:  {}", view.summary.total)?;
    Ok(())
}

fn write_record(
    writer: &mut dyn WriteColor,
    record: &FlakyTestRecord,
    view: &AnalysisView,
) -> anyhow::Result<()> {
    write!(writer, "  ")?;
    writer.set_color(&score_spec(record.display_score(), view))?;
    write!(writer, "{:>3}", record.display_score())?;
    writer.reset()?;
    write!(
        writer,
        "  {:>3}%  {:>5} runs  ",
        record.display_failure_rate(),
        record.total_runs
    )?;
    write_category(writer, record.category)?;
    write!(writer, "  ")?;
    write_status(writer, record.status)?;
    writeln!(
        writer,
        "  {}  {}",
        record.priority.label(),
        record.test_name
    )?;

    write!(
        writer,
        "       project: {}  env: {}",
        record.project_name, record.environment
    )?;
    if let Some(owner) = &record.assigned_to {
        write!(writer, "  owner: {owner}")?;
    }
    writeln!(
        writer,
        "  last failure: {}",
        record.last_failure.format("%Y-%m-%d %H:%M")
    )?;
    Ok(())
}

fn write_category(writer: &mut dyn WriteColor, category: Category) -> anyhow::Result<()> {
    let color = match category {
        Category::High => Color::Red,
        Category::Medium => Color::Yellow,
        Category::Low => Color::Green,
    };
    writer.set_color(ColorSpec::new().set_fg(Some(color)))?;
    write!(writer, "{}", category.label())?;
    writer.reset()?;
    Ok(())
}

fn write_status(writer: &mut dyn WriteColor, status: Status) -> anyhow::Result<()> {
    let mut spec = ColorSpec::new();
    match status {
        Status::Open => spec.set_fg(Some(Color::Red)),
        Status::InProgress => spec.set_fg(Some(Color::Blue)),
        Status::Resolved => spec.set_fg(Some(Color::Green)),
        Status::Ignored => spec.set_dimmed(true),
    };
    writer.set_color(&spec)?;
    write!(writer, "{:<11}", status.label())?;
    writer.reset()?;
    Ok(())
}

/// Score color follows the configured display thresholds.
fn score_spec(score: i64, view: &AnalysisView) -> ColorSpec {
    let color = if score >= view.score_high {
        Color::Red
    } else if score >= view.score_medium {
        Color::Yellow
    } else {
        Color::Green
    };
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color)).set_bold(true);
    spec
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
