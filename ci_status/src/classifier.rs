//! Traffic-light classification of a project's build history.
//!
//! Red and green only look at the single latest status. The breaking-build
//! queries scan the whole history, so an old failure never makes a currently
//! green project red, and a currently red project reports how far back the
//! streak of failures goes.

use std::cell::OnceCell;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::status::ProjectStatus;

/// Read access to one project's build history.
pub trait BuildHistoryProvider {
    fn online(&self) -> bool;

    /// Statuses ordered most recent first.
    fn recent_statuses(&self) -> Vec<&ProjectStatus>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Green,
    Red,
    Yellow,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Green => "green",
            Color::Red => "red",
            Color::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusInWords {
    Failure,
    Success,
    Indeterminate,
    Offline,
}

impl StatusInWords {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusInWords::Failure => "failure",
            StatusInWords::Success => "success",
            StatusInWords::Indeterminate => "indeterminate",
            StatusInWords::Offline => "offline",
        }
    }
}

impl fmt::Display for StatusInWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three traffic-light predicates of a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusFlags {
    pub red: bool,
    pub green: bool,
    pub yellow: bool,
}

impl StatusFlags {
    /// Red wins over green, green over yellow; nothing set means offline.
    pub fn status_in_words(&self) -> StatusInWords {
        if self.red {
            StatusInWords::Failure
        } else if self.green {
            StatusInWords::Success
        } else if self.yellow {
            StatusInWords::Indeterminate
        } else {
            StatusInWords::Offline
        }
    }
}

/// One classification pass over a borrowed history snapshot.
///
/// `last_green` and `breaking_build` are computed at most once per instance.
/// The snapshot is borrowed, so the history cannot change underneath the
/// cached values; build a new classifier after recording statuses.
pub struct StatusClassifier<'a> {
    online: bool,
    recent: Vec<&'a ProjectStatus>,
    last_green: OnceCell<Option<&'a ProjectStatus>>,
    breaking_build: OnceCell<Option<&'a ProjectStatus>>,
}

impl<'a> StatusClassifier<'a> {
    pub fn new<P: BuildHistoryProvider + ?Sized>(provider: &'a P) -> Self {
        Self {
            online: provider.online(),
            recent: provider.recent_statuses(),
            last_green: OnceCell::new(),
            breaking_build: OnceCell::new(),
        }
    }

    pub fn online(&self) -> bool {
        self.online
    }

    pub fn latest_status(&self) -> Option<&'a ProjectStatus> {
        self.recent.first().copied()
    }

    pub fn is_green(&self) -> bool {
        self.online && self.latest_status().is_some_and(|s| s.success)
    }

    /// A project with no statuses is not red.
    pub fn is_red(&self) -> bool {
        self.online && self.latest_status().is_some_and(ProjectStatus::is_red)
    }

    pub fn is_yellow(&self) -> bool {
        self.online && !self.is_red() && !self.is_green()
    }

    pub fn flags(&self) -> StatusFlags {
        StatusFlags {
            red: self.is_red(),
            green: self.is_green(),
            yellow: self.is_yellow(),
        }
    }

    pub fn color(&self) -> Color {
        if !self.online {
            return Color::White;
        }
        if self.is_green() {
            Color::Green
        } else if self.is_red() {
            Color::Red
        } else {
            Color::Yellow
        }
    }

    pub fn status_in_words(&self) -> StatusInWords {
        self.flags().status_in_words()
    }

    /// Most recent successful status.
    pub fn last_green(&self) -> Option<&'a ProjectStatus> {
        *self
            .last_green
            .get_or_init(|| self.recent.iter().copied().find(|s| s.success))
    }

    /// Oldest failure after the last green build, or the oldest failure ever
    /// when the project has never been green.
    pub fn breaking_build(&self) -> Option<&'a ProjectStatus> {
        *self.breaking_build.get_or_init(|| {
            let reds = self.recent.iter().copied().filter(|s| s.is_red());
            match self.last_green() {
                None => reds.last(),
                Some(green) => reds.filter(|s| s.build_id > green.build_id).last(),
            }
        })
    }

    pub fn red_since(&self) -> Option<DateTime<Utc>> {
        self.breaking_build().map(|s| s.published_at)
    }

    /// Failures from the breaking build onwards, the breaking build included.
    pub fn red_build_count(&self) -> usize {
        if !self.online {
            return 0;
        }
        let Some(breaking) = self.breaking_build() else {
            return 0;
        };
        self.recent
            .iter()
            .filter(|s| s.is_red() && s.build_id >= breaking.build_id)
            .count()
    }
}
