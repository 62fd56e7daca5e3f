// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Projects command implementation.
//!
//! Lists the distinct owning projects in a snapshot with how many
//! flaky tests each one carries.

use std::io::Write;

use anyhow::Context;
use serde_json::json;

use unflake::cli::{Cli, OutputFormat, ProjectsArgs};
use unflake::ingest::Snapshot;
use unflake::registry;

/// Run the projects command.
pub fn run(_cli: &Cli, args: &ProjectsArgs) -> anyhow::Result<()> {
    let snapshot = Snapshot::load(&args.snapshot)
        .with_context(|| format!("failed to load snapshot {}", args.snapshot.display()))?;

    let projects = registry::distinct_projects(&snapshot.records);
    let counts: Vec<usize> = projects
        .iter()
        .map(|p| {
            snapshot
                .records
                .iter()
                .filter(|r| r.project_id == p.project_id)
                .count()
        })
        .collect();

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    match args.output {
        OutputFormat::Text => {
            if projects.is_empty() {
                writeln!(writer, "No projects in snapshot.")?;
            }
            for (project, count) in projects.iter().zip(&counts) {
                writeln!(
                    writer,
                    "{}  {}  ({} flaky tests)",
                    project.project_id, project.project_name, count
                )?;
            }
        }
        OutputFormat::Json => {
            let entries: Vec<_> = projects
                .iter()
                .zip(&counts)
                .map(|(project, count)| {
                    json!({
                        "projectId": project.project_id,
                        "projectName": project.project_name,
                        "flakyTests": count,
                    })
                })
                .collect();
            serde_json::to_writer_pretty(&mut writer, &entries)?;
            writeln!(writer)?;
        }
        OutputFormat::Markdown => {
            if projects.is_empty() {
                writeln!(writer, "No projects in snapshot.")?;
                return Ok(());
            }
            writeln!(writer, "| Project | Id | Flaky tests |")?;
            writeln!(writer, "|---------|----|-------------|")?;
            for (project, count) in projects.iter().zip(&counts) {
                writeln!(
                    writer,
                    "| {} | {} | {} |",
                    project.project_name, project.project_id, count
                )?;
            }
        }
    }
    Ok(())
}
