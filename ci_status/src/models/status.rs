//! ci.project.status — One recorded outcome of a build run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStatus {
    /// Sequence position within the project. Larger is more recent.
    pub id: i64,
    /// Build number reported by the CI server.
    pub build_id: i64,
    pub success: bool,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub url: Option<String>,
}

impl ProjectStatus {
    pub fn is_red(&self) -> bool {
        !self.success
    }
}
