//! ci.project — A monitored build pipeline and its status history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classifier::{BuildHistoryProvider, StatusClassifier};
use crate::error::StatusError;
use crate::models::status::ProjectStatus;
use crate::sources::{CiSource, StatusSource};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub online: bool,
    #[serde(default)]
    pub source: Option<CiSource>,
    #[serde(default)]
    pub statuses: Vec<ProjectStatus>,
}

impl Project {
    pub fn new(id: i64, name: impl Into<String>, online: bool) -> Self {
        Self {
            id,
            name: name.into(),
            online,
            source: None,
            statuses: Vec::new(),
        }
    }

    pub fn with_source(mut self, source: CiSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Append a status, assigning the next sequence position.
    pub fn record_status(
        &mut self,
        build_id: i64,
        success: bool,
        published_at: DateTime<Utc>,
    ) -> Result<&ProjectStatus, StatusError> {
        let id = self
            .statuses
            .iter()
            .map(|s| s.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| StatusError::SequenceExhausted {
                project: self.name.clone(),
            })?;

        let index = self.statuses.len();
        self.statuses.push(ProjectStatus {
            id,
            build_id,
            success,
            published_at,
            url: None,
        });
        tracing::trace!(project = %self.name, status_id = id, build_id, success, "Status recorded");
        Ok(&self.statuses[index])
    }

    /// Start a classification pass over the current history.
    pub fn classify(&self) -> StatusClassifier<'_> {
        StatusClassifier::new(self)
    }

    /// URL the poller fetches to learn this project's build status.
    pub fn build_status_url(&self) -> Result<String, StatusError> {
        match &self.source {
            Some(source) => source.build_status_url(),
            None => Err(StatusError::NotImplemented {
                hook: "build_status_url",
            }),
        }
    }

    pub fn current_build_url(&self) -> Option<String> {
        self.source.as_ref().and_then(|s| s.current_build_url())
    }
}

impl BuildHistoryProvider for Project {
    fn online(&self) -> bool {
        self.online
    }

    fn recent_statuses(&self) -> Vec<&ProjectStatus> {
        let mut statuses: Vec<&ProjectStatus> = self.statuses.iter().collect();
        statuses.sort_by(|a, b| b.id.cmp(&a.id));
        statuses
    }
}
