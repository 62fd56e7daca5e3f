// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading for unflake.toml.
//!
//! Only an `[analysis]` table exists today. Unknown keys warn rather
//! than fail, so a config written for a newer version still loads.

use std::path::Path;

use serde::Deserialize;

use crate::registry::SortKey;

/// Errors from reading or parsing a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Analysis display settings.
    pub analysis: AnalysisConfig,
}

/// Settings for the analyze view. CLI flags override all of these.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Default sort key.
    pub sort: SortKeyName,

    /// How many top-ranked tests get fix-suggestion cards (default: 3).
    pub top_fixes: usize,

    /// Scores at or above this render as high risk (default: 70).
    pub score_high: i64,

    /// Scores at or above this render as medium risk (default: 40).
    pub score_medium: i64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sort: SortKeyName::default(),
            top_fixes: Self::default_top_fixes(),
            score_high: Self::default_score_high(),
            score_medium: Self::default_score_medium(),
        }
    }
}

impl AnalysisConfig {
    pub(crate) fn default_top_fixes() -> usize {
        3
    }

    // Score breakpoints mirror the dashboard's red/yellow/green split.
    pub(crate) fn default_score_high() -> i64 {
        70
    }

    pub(crate) fn default_score_medium() -> i64 {
        40
    }
}

/// Serde-facing sort key names, kept in sync with the CLI values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKeyName {
    #[default]
    Score,
    FailureRate,
    Runs,
}

impl From<SortKeyName> for SortKey {
    fn from(name: SortKeyName) -> Self {
        match name {
            SortKeyName::Score => SortKey::InstabilityScore,
            SortKeyName::FailureRate => SortKey::FailureRate,
            SortKeyName::Runs => SortKey::TotalRuns,
        }
    }
}

/// Load a config file, warning about unknown keys instead of failing.
pub fn load_with_warnings(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_with_warnings(&content)
}

/// Parse config TOML, warning about unknown keys instead of failing.
pub fn parse_with_warnings(content: &str) -> Result<Config, ConfigError> {
    let table: toml::Table = toml::from_str(content)?;
    warn_unknown_keys(&table);
    Ok(toml::from_str(content)?)
}

fn warn_unknown_keys(table: &toml::Table) {
    const TOP_LEVEL: &[&str] = &["analysis"];
    const ANALYSIS: &[&str] = &["sort", "top_fixes", "score_high", "score_medium"];

    for key in table.keys() {
        if !TOP_LEVEL.contains(&key.as_str()) {
            tracing::warn!("unknown config key `{key}`, ignoring");
        }
    }
    if let Some(toml::Value::Table(analysis)) = table.get("analysis") {
        for key in analysis.keys() {
            if !ANALYSIS.contains(&key.as_str()) {
                tracing::warn!("unknown config key `analysis.{key}`, ignoring");
            }
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
