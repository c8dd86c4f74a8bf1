//! Per-project status report — every derived value from one classifier pass.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::classifier::{Color, StatusInWords};
use crate::models::project::Project;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectReport {
    pub id: i64,
    pub name: String,
    pub online: bool,
    pub color: Color,
    pub status: StatusInWords,
    pub last_green_build: Option<i64>,
    pub breaking_build: Option<i64>,
    pub red_since: Option<DateTime<Utc>>,
    pub red_build_count: usize,
    pub build_status_url: Option<String>,
    pub current_build_url: Option<String>,
}

impl ProjectReport {
    pub fn build(project: &Project) -> Self {
        let classifier = project.classify();

        let build_status_url = match project.build_status_url() {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::debug!(project = %project.name, error = %e, "No build status URL");
                None
            }
        };

        let report = Self {
            id: project.id,
            name: project.name.clone(),
            online: classifier.online(),
            color: classifier.color(),
            status: classifier.status_in_words(),
            last_green_build: classifier.last_green().map(|s| s.build_id),
            breaking_build: classifier.breaking_build().map(|s| s.build_id),
            red_since: classifier.red_since(),
            red_build_count: classifier.red_build_count(),
            build_status_url,
            current_build_url: project.current_build_url(),
        };

        crate::metrics::project_classified(report.color);
        tracing::debug!(
            project = %report.name,
            color = %report.color,
            red_build_count = report.red_build_count,
            "Project classified"
        );

        report
    }

    pub fn is_red(&self) -> bool {
        self.status == StatusInWords::Failure
    }

    /// One-line, human-readable status.
    pub fn summary(&self) -> String {
        match self.status {
            StatusInWords::Failure => {
                let builds = if self.red_build_count == 1 {
                    "build"
                } else {
                    "builds"
                };
                match self.red_since {
                    Some(since) => format!(
                        "{}: red for {} {} since {}",
                        self.name,
                        self.red_build_count,
                        builds,
                        since.to_rfc3339_opts(SecondsFormat::Secs, true)
                    ),
                    None => format!("{}: red for {} {}", self.name, self.red_build_count, builds),
                }
            }
            StatusInWords::Success => format!("{}: green", self.name),
            StatusInWords::Indeterminate => format!("{}: no builds yet", self.name),
            StatusInWords::Offline => format!("{}: offline", self.name),
        }
    }
}
