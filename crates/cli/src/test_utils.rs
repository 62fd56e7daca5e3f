// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::{TimeZone, Utc};

use crate::record::{Category, FlakyTestRecord, Priority, Status};

/// A record with sensible defaults for the fields a test doesn't care
/// about. Tests mutate the returned value to set up their scenario.
pub fn sample_record(id: &str, score: i64, category: Category) -> FlakyTestRecord {
    FlakyTestRecord {
        id: id.to_string(),
        test_name: format!("Test {id}"),
        instability_score: score,
        failure_rate: score / 4,
        total_runs: 100,
        last_failure: Utc.with_ymd_and_hms(2023, 6, 15, 14, 32, 45).unwrap(),
        category,
        environment: "Chrome / Windows".to_string(),
        project_id: "1".to_string(),
        project_name: "E-commerce Platform".to_string(),
        assigned_to: None,
        status: Status::Open,
        priority: Priority::Medium,
        suggested_fixes: vec!["Add explicit waits".to_string()],
    }
}

/// The worked example from the product notes: scores 85/72/58 with
/// categories high/high/medium.
pub fn example_trio() -> Vec<FlakyTestRecord> {
    vec![
        sample_record("1", 85, Category::High),
        sample_record("2", 72, Category::High),
        sample_record("3", 58, Category::Medium),
    ]
}
