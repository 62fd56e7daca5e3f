// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot ingestion and validation.
//!
//! The upstream exporter writes a JSON array of flaky-test records.
//! Parsing is permissive per record: a record with an unrecognized
//! enum value or an empty test name is dropped from the snapshot and
//! logged, never turned into a process failure. Out-of-range numeric
//! fields keep the record but surface a data-quality warning; the
//! stored value is left untouched and only clamped at display time.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::record::FlakyTestRecord;

/// Errors that abort ingestion entirely.
///
/// Everything below the file/document level degrades to a
/// [`DataQualityIssue`] instead.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot root must be a JSON array of records")]
    NotAnArray,
}

/// A non-fatal problem found while validating the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQualityIssue {
    /// Record id when the offending record carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,

    /// Human-readable description of the problem.
    pub detail: String,

    /// Whether the record was dropped from the snapshot.
    pub rejected: bool,
}

/// A validated point-in-time set of flaky-test records.
///
/// Queries never retain the snapshot; re-ingesting after an external
/// refresh simply replaces the prior one.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Records that passed validation, in input order.
    pub records: Vec<FlakyTestRecord>,

    /// Data-quality issues found during validation.
    pub issues: Vec<DataQualityIssue>,
}

impl Snapshot {
    /// Load and validate a snapshot file.
    pub fn load(path: &Path) -> Result<Self, IngestError> {
        let content = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse and validate snapshot JSON.
    ///
    /// An empty array is a valid, non-error snapshot.
    pub fn parse(json: &str) -> Result<Self, IngestError> {
        let root: Value = serde_json::from_str(json)?;
        let Value::Array(entries) = root else {
            return Err(IngestError::NotAnArray);
        };

        let mut records = Vec::with_capacity(entries.len());
        let mut issues = Vec::new();

        for (index, entry) in entries.into_iter().enumerate() {
            // Pull the id out before the typed parse so rejections can
            // still name the record they dropped.
            let id = entry
                .get("id")
                .and_then(Value::as_str)
                .map(ToString::to_string);

            match serde_json::from_value::<FlakyTestRecord>(entry) {
                Ok(record) => validate(record, &mut records, &mut issues),
                Err(err) => {
                    let detail = match &id {
                        Some(id) => format!("record {id} rejected: {err}"),
                        None => format!("record at index {index} rejected: {err}"),
                    };
                    tracing::warn!("{detail}");
                    issues.push(DataQualityIssue { record_id: id, detail, rejected: true });
                }
            }
        }

        check_project_names(&records, &mut issues);

        Ok(Self { records, issues })
    }

    /// True when no record survived validation.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Flag records whose `project_id` maps to more than one project name.
///
/// First-seen name wins everywhere the projects are listed; the
/// disagreement itself is a data-quality problem worth surfacing to
/// machine consumers, so it lands in the issue list rather than only
/// in the log.
fn check_project_names(records: &[FlakyTestRecord], issues: &mut Vec<DataQualityIssue>) {
    let mut seen: Vec<(&str, &str)> = Vec::new();
    for record in records {
        match seen.iter().find(|(id, _)| *id == record.project_id) {
            Some((_, first_name)) => {
                if *first_name != record.project_name {
                    let detail = format!(
                        "record {}: project {} named {:?} here but {:?} first, keeping first",
                        record.id, record.project_id, record.project_name, first_name
                    );
                    tracing::warn!("{detail}");
                    issues.push(DataQualityIssue {
                        record_id: Some(record.id.clone()),
                        detail,
                        rejected: false,
                    });
                }
            }
            None => seen.push((&record.project_id, &record.project_name)),
        }
    }
}

/// Apply field-level validation to one typed record.
fn validate(
    record: FlakyTestRecord,
    records: &mut Vec<FlakyTestRecord>,
    issues: &mut Vec<DataQualityIssue>,
) {
    if record.test_name.trim().is_empty() {
        let detail = format!("record {} rejected: empty test name", record.id);
        tracing::warn!("{detail}");
        issues.push(DataQualityIssue {
            record_id: Some(record.id),
            detail,
            rejected: true,
        });
        return;
    }

    // Out-of-range scores keep the record; display clamps, the stored
    // value stays as supplied.
    if !(0..=100).contains(&record.instability_score) {
        warn_range(&record, "instabilityScore", record.instability_score, issues);
    }
    if !(0..=100).contains(&record.failure_rate) {
        warn_range(&record, "failureRate", record.failure_rate, issues);
    }

    records.push(record);
}

fn warn_range(
    record: &FlakyTestRecord,
    field: &str,
    value: i64,
    issues: &mut Vec<DataQualityIssue>,
) {
    let detail = format!(
        "record {}: {field} {value} outside 0-100, clamped for display",
        record.id
    );
    tracing::warn!("{detail}");
    issues.push(DataQualityIssue {
        record_id: Some(record.id.clone()),
        detail,
        rejected: false,
    });
}

#[cfg(test)]
#[path = "ingest_tests.rs"]
mod tests;
