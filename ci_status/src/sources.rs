//! CI provider integrations — where a project's build status comes from.

use serde::{Deserialize, Serialize};

use crate::error::StatusError;

/// A CI server a project's statuses are polled from.
pub trait StatusSource {
    fn provider_name(&self) -> &'static str;

    /// Feed or API endpoint that reports the project's builds.
    fn build_status_url(&self) -> Result<String, StatusError>;

    /// Human-facing page for the project on the CI server.
    fn current_build_url(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CiSource {
    Jenkins {
        base_url: String,
        build_name: String,
    },
    Travis {
        github_account: String,
        repository: String,
    },
    TeamCity {
        base_url: String,
        build_type_id: String,
    },
    CruiseControl {
        rss_feed_url: String,
    },
    Semaphore {
        api_url: String,
    },
}

fn required<'a>(
    provider: &'static str,
    field: &'static str,
    value: &'a str,
) -> Result<&'a str, StatusError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(StatusError::MissingField { provider, field });
    }
    Ok(value)
}

fn base(provider: &'static str, field: &'static str, url: &str) -> Result<String, StatusError> {
    Ok(required(provider, field, url)?
        .trim_end_matches('/')
        .to_string())
}

impl StatusSource for CiSource {
    fn provider_name(&self) -> &'static str {
        match self {
            CiSource::Jenkins { .. } => "jenkins",
            CiSource::Travis { .. } => "travis",
            CiSource::TeamCity { .. } => "team_city",
            CiSource::CruiseControl { .. } => "cruise_control",
            CiSource::Semaphore { .. } => "semaphore",
        }
    }

    fn build_status_url(&self) -> Result<String, StatusError> {
        let provider = self.provider_name();
        match self {
            CiSource::Jenkins {
                base_url,
                build_name,
            } => {
                let base_url = base(provider, "base_url", base_url)?;
                let build_name = required(provider, "build_name", build_name)?;
                Ok(format!("{base_url}/job/{build_name}/rssAll"))
            }
            CiSource::Travis {
                github_account,
                repository,
            } => {
                let account = required(provider, "github_account", github_account)?;
                let repository = required(provider, "repository", repository)?;
                Ok(format!(
                    "https://api.travis-ci.org/repositories/{account}/{repository}/builds.json"
                ))
            }
            CiSource::TeamCity {
                base_url,
                build_type_id,
            } => {
                let base_url = base(provider, "base_url", base_url)?;
                let build_type_id = required(provider, "build_type_id", build_type_id)?;
                Ok(format!(
                    "{base_url}/app/rest/builds?locator=running:all,buildType:(id:{build_type_id}),personal:false"
                ))
            }
            CiSource::CruiseControl { rss_feed_url } => {
                Ok(required(provider, "rss_feed_url", rss_feed_url)?.to_string())
            }
            CiSource::Semaphore { api_url } => {
                Ok(required(provider, "api_url", api_url)?.to_string())
            }
        }
    }

    fn current_build_url(&self) -> Option<String> {
        let provider = self.provider_name();
        match self {
            CiSource::Jenkins {
                base_url,
                build_name,
            } => {
                let base_url = base(provider, "base_url", base_url).ok()?;
                let build_name = required(provider, "build_name", build_name).ok()?;
                Some(format!("{base_url}/job/{build_name}"))
            }
            CiSource::Travis {
                github_account,
                repository,
            } => {
                let account = required(provider, "github_account", github_account).ok()?;
                let repository = required(provider, "repository", repository).ok()?;
                Some(format!("https://travis-ci.org/{account}/{repository}"))
            }
            CiSource::TeamCity {
                base_url,
                build_type_id,
            } => {
                let base_url = base(provider, "base_url", base_url).ok()?;
                let build_type_id = required(provider, "build_type_id", build_type_id).ok()?;
                Some(format!("{base_url}/viewType.html?buildTypeId={build_type_id}"))
            }
            CiSource::CruiseControl { .. } | CiSource::Semaphore { .. } => None,
        }
    }
}
