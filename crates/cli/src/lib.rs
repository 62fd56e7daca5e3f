// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! unflake: flaky-test triage.
//!
//! Ingests a JSON snapshot of flaky-test records and answers
//! filter/sort/aggregate queries over it. The registry is a pure query
//! layer; records are immutable once ingested and views are derived
//! per call, never cached.

pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod ingest;
pub mod record;
pub mod registry;
pub mod report;

#[cfg(test)]
pub mod test_utils;
