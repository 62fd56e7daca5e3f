// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flaky-test record types.
//!
//! A `FlakyTestRecord` describes one test known to fail intermittently,
//! as supplied by the upstream results exporter. Records are immutable
//! once ingested; every view over them is derived, never written back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Risk bucket for triage grouping.
///
/// Independently supplied by the exporter; NOT derived from
/// `instability_score` (the score thresholds only drive display color).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    High,
    Medium,
    Low,
}

impl Category {
    /// Label used in reports and filter flags.
    pub fn label(self) -> &'static str {
        match self {
            Category::High => "high",
            Category::Medium => "medium",
            Category::Low => "low",
        }
    }
}

/// Lifecycle status, advanced only by external user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Open,
    InProgress,
    Resolved,
    Ignored,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::InProgress => "in-progress",
            Status::Resolved => "resolved",
            Status::Ignored => "ignored",
        }
    }
}

/// Triage priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// One test known to fail intermittently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlakyTestRecord {
    /// Unique identifier, stable across requeries.
    pub id: String,

    /// Display name, non-empty.
    pub test_name: String,

    /// Instability score 0-100, higher = less stable.
    pub instability_score: i64,

    /// Percentage 0-100 of runs that failed.
    pub failure_rate: i64,

    /// Count of historical executions.
    pub total_runs: u64,

    /// Most recent failure instant.
    pub last_failure: DateTime<Utc>,

    /// Risk bucket.
    pub category: Category,

    /// Execution context (browser/OS combination).
    pub environment: String,

    /// Owning project id (many records to one project).
    pub project_id: String,

    /// Owning project display name.
    pub project_name: String,

    /// Owner, if anyone picked it up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,

    /// Lifecycle status.
    pub status: Status,

    /// Triage priority.
    pub priority: Priority,

    /// Ordered remediation hints, display-only.
    #[serde(default)]
    pub suggested_fixes: Vec<String>,
}

impl FlakyTestRecord {
    /// Instability score clamped to 0-100 for display.
    ///
    /// The stored value is never rewritten; an out-of-range score is a
    /// data-quality issue surfaced at ingest.
    pub fn display_score(&self) -> i64 {
        self.instability_score.clamp(0, 100)
    }

    /// Failure rate clamped to 0-100 for display.
    pub fn display_failure_rate(&self) -> i64 {
        self.failure_rate.clamp(0, 100)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
