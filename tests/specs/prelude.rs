//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates::prelude::*;
use std::process::Command;

/// Returns a Command configured to run the unflake binary
pub fn unflake_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("unflake"))
}

/// Get path to a file in the flaky-test fixture directory
pub fn fixture(name: &str) -> std::path::PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    std::path::PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join("flaky")
        .join(name)
}
