// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Looks for `unflake.toml` in the starting directory and its
//! ancestors, stopping at the repository root so a config outside the
//! checkout is never picked up.

use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "unflake.toml";

/// Find `unflake.toml` in `start_dir` or an ancestor, up to the git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            // Repository root without a config: nothing to find.
            return None;
        }
    }
    None
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
