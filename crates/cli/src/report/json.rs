// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.
//!
//! The document shape is stable for machine consumers: `summary`,
//! `sort`, `tests` (in display order), `topSuggestions`, `issues`.


use serde_json::json;
use termcolor::WriteColor;

use super::{AnalysisView, ReportFormatter};

/// JSON format report formatter.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format_to(&self, writer: &mut dyn WriteColor, view: &AnalysisView) -> anyhow::Result<()> {
        let top: Vec<_> = view
            .top
            .iter()
            .map(|record| {
                json!({
                    "id": record.id,
                    "testName": record.test_name,
                    "category": record.category,
                    "suggestedFixes": record.suggested_fixes,
                })
            })
            .collect();

        let document = json!({
            "summary": view.summary,
            "sort": view.sort.label(),
            "tests": view.ranked,
            "topSuggestions": top,
            "issues": view.issues,
        });

        serde_json::to_writer_pretty(&mut *writer, &document)?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
