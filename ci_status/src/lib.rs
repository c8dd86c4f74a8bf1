//! Traffic-light status for monitored CI projects.
//!
//! Given a project's `online` flag and its recorded build outcomes, the
//! classifier derives red/green/yellow/offline, the last green build, the
//! build that broke it, and how long and how many builds it has been red.
//! Polling CI servers and storing statuses are left to the caller.

pub mod classifier;
pub mod error;
pub mod metrics;
pub mod models;
pub mod report;
pub mod sources;

pub use classifier::{
    BuildHistoryProvider, Color, StatusClassifier, StatusFlags, StatusInWords,
};
pub use error::StatusError;
pub use models::project::Project;
pub use models::status::ProjectStatus;
pub use report::ProjectReport;
pub use sources::{CiSource, StatusSource};
