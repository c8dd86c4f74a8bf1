//! Report configuration — loaded from environment variables.

#[derive(Clone, Debug)]
pub struct ReportConfig {
    /// Red projects with at least this many red builds are logged as warnings.
    pub red_alert_builds: usize,
}

impl ReportConfig {
    pub fn from_env() -> Self {
        let red_alert_builds = std::env::var("CI_RED_ALERT_BUILDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        Self { red_alert_builds }
    }
}
