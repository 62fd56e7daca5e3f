// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The flaky-test registry: pure queries over a record snapshot.
//!
//! Every operation borrows the snapshot and derives a view; nothing
//! here mutates a record or retains state between calls. Filter and
//! sort compose: filter first, then sort, then take the top slice for
//! the fix-suggestion cards.

use serde::Serialize;

use crate::record::{Category, FlakyTestRecord, Status};

/// Numeric field to rank by. All keys sort descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Instability score (default).
    #[default]
    InstabilityScore,
    /// Failure rate percentage.
    FailureRate,
    /// Total historical runs.
    TotalRuns,
}

impl SortKey {
    /// Human-readable name for report headers.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::InstabilityScore => "instability score",
            SortKey::FailureRate => "failure rate",
            SortKey::TotalRuns => "total runs",
        }
    }
}

/// Conjunction of optional predicates. `None` matches every record,
/// mirroring the "all" choice in each filter control.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub category: Option<Category>,
    pub project_id: Option<String>,
    pub status: Option<Status>,
}

impl RecordFilter {
    /// True when every set predicate matches.
    pub fn matches(&self, record: &FlakyTestRecord) -> bool {
        let category_ok = self.category.is_none_or(|c| record.category == c);
        let project_ok = self
            .project_id
            .as_deref()
            .is_none_or(|p| record.project_id == p);
        let status_ok = self.status.is_none_or(|s| record.status == s);
        category_ok && project_ok && status_ok
    }
}

/// Per-bucket record counts over the full snapshot.
///
/// Always computed over the unfiltered snapshot: the summary cards
/// report global risk posture regardless of active filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RiskSummary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub total: usize,
}

/// One owning project, deduplicated by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRef {
    pub project_id: String,
    pub project_name: String,
}

/// Select the records matching `filter`, preserving input order.
pub fn filter<'a>(
    records: &'a [FlakyTestRecord],
    filter: &RecordFilter,
) -> Vec<&'a FlakyTestRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// Rank records descending by `key`.
///
/// The sort is stable: records with equal key values keep their
/// relative input order, so re-sorting a sorted sequence is a no-op.
pub fn sort_by<'a>(records: &[&'a FlakyTestRecord], key: SortKey) -> Vec<&'a FlakyTestRecord> {
    let mut sorted = records.to_vec();
    match key {
        SortKey::InstabilityScore => sorted.sort_by(|a, b| b.instability_score.cmp(&a.instability_score)),
        SortKey::FailureRate => sorted.sort_by(|a, b| b.failure_rate.cmp(&a.failure_rate)),
        SortKey::TotalRuns => sorted.sort_by(|a, b| b.total_runs.cmp(&a.total_runs)),
    }
    sorted
}

/// Count records per risk bucket over the full snapshot.
pub fn summarize(records: &[FlakyTestRecord]) -> RiskSummary {
    let mut summary = RiskSummary { total: records.len(), ..RiskSummary::default() };
    for record in records {
        match record.category {
            Category::High => summary.high += 1,
            Category::Medium => summary.medium += 1,
            Category::Low => summary.low += 1,
        }
    }
    summary
}

/// Owning projects in first-seen order, one entry per unique id.
///
/// If two records share an id but disagree on the name, the first-seen
/// name wins and the disagreement is logged as a data-quality problem.
pub fn distinct_projects(records: &[FlakyTestRecord]) -> Vec<ProjectRef> {
    let mut projects: Vec<ProjectRef> = Vec::new();
    for record in records {
        match projects.iter().find(|p| p.project_id == record.project_id) {
            Some(existing) => {
                if existing.project_name != record.project_name {
                    tracing::warn!(
                        "project {} has conflicting names: {:?} vs {:?} (keeping first)",
                        record.project_id,
                        existing.project_name,
                        record.project_name,
                    );
                }
            }
            None => projects.push(ProjectRef {
                project_id: record.project_id.clone(),
                project_name: record.project_name.clone(),
            }),
        }
    }
    projects
}

/// First `n` records of an already-ranked sequence, for the fix cards.
///
/// Takes the sequence as ranked by the caller; it is not re-sorted.
pub fn top_suggestions<'a, 'r>(
    sorted: &'a [&'r FlakyTestRecord],
    n: usize,
) -> &'a [&'r FlakyTestRecord] {
    &sorted[..n.min(sorted.len())]
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
