//! CI status data models — projects and their recorded build outcomes.

pub mod project;
pub mod status;
