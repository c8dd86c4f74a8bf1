//! Loading project status snapshots exported by the monitoring app.

use std::path::Path;

use anyhow::Context;
use ci_status::Project;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum Snapshot {
    Projects(Vec<Project>),
    Wrapped { projects: Vec<Project> },
}

/// Parse a snapshot: either a bare array of projects or `{"projects": [...]}`.
pub fn parse(json: &str) -> anyhow::Result<Vec<Project>> {
    let snapshot: Snapshot = serde_json::from_str(json).context("invalid snapshot JSON")?;
    Ok(match snapshot {
        Snapshot::Projects(projects) | Snapshot::Wrapped { projects } => projects,
    })
}

pub fn load(path: &Path) -> anyhow::Result<Vec<Project>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    let projects = parse(&json).with_context(|| format!("parsing snapshot {}", path.display()))?;
    tracing::info!(path = %path.display(), projects = projects.len(), "Snapshot loaded");
    Ok(projects)
}
