// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for the text formatter.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use termcolor::Buffer;

use super::*;
use crate::registry::{self, RecordFilter, SortKey};
use crate::test_utils::example_trio;

fn render(records: &[FlakyTestRecord], top_n: usize) -> String {
    let filtered = registry::filter(records, &RecordFilter::default());
    let ranked = registry::sort_by(&filtered, SortKey::InstabilityScore);
    let top = registry::top_suggestions(&ranked, top_n).to_vec();
    let view = AnalysisView {
        summary: registry::summarize(records),
        sort: SortKey::InstabilityScore,
        ranked,
        top,
        issues: &[],
        score_high: 70,
        score_medium: 40,
    };
    let mut buffer = Buffer::no_color();
    TextFormatter.format_to(&mut buffer, &view).unwrap();
    String::from_utf8(buffer.into_inner()).unwrap()
}

#[test]
fn renders_summary_counts() {
    let output = render(&example_trio(), 0);
    assert!(output.contains("High risk:    2"));
    assert!(output.contains("Medium risk:  1"));
    assert!(output.contains("Low risk:     0"));
    assert!(output.contains("Total tests:  3"));
}

#[test]
fn renders_ranked_records_in_order() {
    let output = render(&example_trio(), 0);
    let pos_1 = output.find("Test 1").unwrap();
    let pos_2 = output.find("Test 2").unwrap();
    let pos_3 = output.find("Test 3").unwrap();
    assert!(pos_1 < pos_2 && pos_2 < pos_3);
    assert!(output.contains("Ranked by instability score (3 of 3 shown)"));
}

#[test]
fn renders_fix_cards_for_top_records() {
    let output = render(&example_trio(), 2);
    assert!(output.contains("Fix suggestions"));
    assert!(output.contains("1. Test 1 (high risk)"));
    assert!(output.contains("2. Test 2 (high risk)"));
    assert!(!output.contains("3. Test 3"));
    assert!(output.contains("   - Add explicit waits"));
}

#[test]
fn renders_record_details() {
    let mut records = example_trio();
    records[0].assigned_to = Some("Alice Johnson".to_string());
    let output = render(&records, 0);
    assert!(output.contains("project: E-commerce Platform"));
    assert!(output.contains("env: Chrome / Windows"));
    assert!(output.contains("owner: Alice Johnson"));
    assert!(output.contains("last failure: 2023-06-15 14:32"));
}

#[test]
fn empty_snapshot_renders_notice() {
    let output = render(&[], 3);
    assert!(output.contains("Total tests:  0"));
    assert!(output.contains("No flaky tests in snapshot."));
    assert!(!output.contains("Ranked by"));
}

#[test]
fn out_of_range_score_renders_clamped() {
    let mut records = example_trio();
    records[0].instability_score = 140;
    let output = render(&records, 0);
    assert!(output.contains("100"));
    assert!(!output.contains("140"));
}

#[test]
fn colored_stream_gets_ansi_codes() {
    let records = example_trio();
    let filtered = registry::filter(&records, &RecordFilter::default());
    let ranked = registry::sort_by(&filtered, SortKey::InstabilityScore);
    let view = AnalysisView {
        summary: registry::summarize(&records),
        sort: SortKey::InstabilityScore,
        ranked,
        top: Vec::new(),
        issues: &[],
        score_high: 70,
        score_medium: 40,
    };
    let mut buffer = Buffer::ansi();
    TextFormatter.format_to(&mut buffer, &view).unwrap();
    let output = String::from_utf8(buffer.into_inner()).unwrap();
    assert!(output.contains("\u{1b}["));
}
